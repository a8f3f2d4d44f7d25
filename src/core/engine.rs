use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct SummaryEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SummaryEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        println!("Starting selection summary...");

        println!("Loading selected dishes...");
        let dishes = self.pipeline.extract()?;
        println!("Loaded {} dishes", dishes.len());

        println!("Aggregating ingredient costs...");
        let summary = self.pipeline.summarize(dishes)?;
        println!(
            "Merged into {} ingredient lines, total cost {}",
            summary.lines.len(),
            summary.total_cost
        );

        println!("Writing report...");
        let output_path = self.pipeline.load(summary)?;
        println!("Report saved to: {}", output_path);

        Ok(output_path)
    }
}
