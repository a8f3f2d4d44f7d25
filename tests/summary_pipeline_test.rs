use dishly::domain::ports::Pipeline;
use dishly::{
    CliConfig, LocalStorage, RulesConfig, SelectionSummary, SummaryEngine, SummaryPipeline, Tag,
    TagRuleTable,
};
use tempfile::TempDir;

const SELECTION_JSON: &str = r#"[
    {
        "id": "d1", "name": "Bolognese", "owner": "u1",
        "tags": [],
        "ingredients": [
            {"ingredient": {"id": "i1", "name": "Beef", "unitType": "gram", "pricePer100g": 120, "tags": ["meat"]}, "amount": 250},
            {"ingredient": {"id": "i2", "name": "Tomato", "unitType": "gram", "pricePer100g": 50, "tags": ["vegan"]}, "amount": 200}
        ]
    },
    {
        "id": "d2", "name": "Tomato Soup", "owner": "u1",
        "tags": [],
        "ingredients": [
            {"ingredient": {"id": "i2", "name": "Tomato", "unitType": "gram", "pricePer100g": 50, "tags": ["vegan"]}, "amount": 300},
            {"ingredient": {"id": "i3", "name": "Cream", "unitType": "liter", "pricePerLiter": 8, "tags": ["dairy"]}, "amount": 0.25}
        ]
    }
]"#;

fn test_config(output_path: &str) -> CliConfig {
    CliConfig {
        selection_file: "selection.json".to_string(),
        rules_file: None,
        output_path: output_path.to_string(),
        list_tags: false,
        verbose: false,
    }
}

#[test]
fn end_to_end_summary_over_real_files() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("selection.json"), SELECTION_JSON).unwrap();

    let storage = LocalStorage::new(temp_dir.path().to_string_lossy().into_owned());
    let pipeline = SummaryPipeline::new(storage, test_config("out"), TagRuleTable::builtin());
    let engine = SummaryEngine::new(pipeline);

    let output_path = engine.run().unwrap();
    assert_eq!(output_path, "out");

    let csv_content =
        std::fs::read_to_string(temp_dir.path().join("out").join("summary.csv")).unwrap();
    let mut lines = csv_content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "ingredientName,unitType,totalAmount,unitPriceDisplay,lineCost"
    );
    // Merged tomato line: 200g + 300g at 50 per 100g.
    assert!(csv_content.contains("Tomato,gram,500.0,50.0,250.0"));

    let json_content =
        std::fs::read_to_string(temp_dir.path().join("out").join("summary.json")).unwrap();
    let summary: SelectionSummary = serde_json::from_str(&json_content).unwrap();
    assert_eq!(summary.lines.len(), 3);
    // Beef 300 + Tomato 250 + Cream 2.
    assert_eq!(summary.total_cost, 552.0);
    let sum: f64 = summary.lines.iter().map(|l| l.line_cost).sum();
    assert_eq!(summary.total_cost, sum);
}

#[test]
fn extract_rederives_dish_tags_from_ingredients() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("selection.json"), SELECTION_JSON).unwrap();

    let storage = LocalStorage::new(temp_dir.path().to_string_lossy().into_owned());
    let pipeline = SummaryPipeline::new(storage, test_config("out"), TagRuleTable::builtin());

    let dishes = pipeline.extract().unwrap();

    // Beef (meat, priority 1) knocks out the tomato's vegan tag.
    assert_eq!(dishes[0].tags, vec![Tag::from("meat")]);
    // Dairy and vegan conflict; dairy has the higher precedence.
    assert_eq!(dishes[1].tags, vec![Tag::from("dairy")]);
}

#[test]
fn pipeline_honours_a_custom_rule_table() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("selection.json"), SELECTION_JSON).unwrap();
    // Inverted table: vegan outranks everything.
    std::fs::write(
        temp_dir.path().join("rules.toml"),
        r#"
[[rules]]
tag = "vegan"
conflicts = ["meat", "dairy"]
priority = 1

[[rules]]
tag = "meat"
conflicts = ["vegan"]
priority = 2

[[rules]]
tag = "dairy"
conflicts = ["vegan"]
priority = 2
"#,
    )
    .unwrap();

    let rules = RulesConfig::from_file(temp_dir.path().join("rules.toml"))
        .unwrap()
        .into_table()
        .unwrap();

    let storage = LocalStorage::new(temp_dir.path().to_string_lossy().into_owned());
    let pipeline = SummaryPipeline::new(storage, test_config("out"), rules);

    let dishes = pipeline.extract().unwrap();

    assert_eq!(dishes[0].tags, vec![Tag::from("vegan")]);
    assert_eq!(dishes[1].tags, vec![Tag::from("vegan")]);
}

#[test]
fn missing_selection_file_surfaces_io_error() {
    let temp_dir = TempDir::new().unwrap();

    let storage = LocalStorage::new(temp_dir.path().to_string_lossy().into_owned());
    let pipeline = SummaryPipeline::new(storage, test_config("out"), TagRuleTable::builtin());
    let engine = SummaryEngine::new(pipeline);

    assert!(engine.run().is_err());
}
