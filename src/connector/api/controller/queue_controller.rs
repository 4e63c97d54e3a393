use anyhow::Result;

use super::super::Container;

pub struct QueueController<'a> {
    container: &'a Container,
}

impl<'a> QueueController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn drain(&self) -> Result<String> {
        let use_case = self.container.drain_use_case();
        let responses = use_case.execute().await?;

        let failed = responses.iter().filter(|r| r.has_errors()).count();
        let mut output = format!(
            "Drained {} notifications ({} failed).",
            responses.len(),
            failed
        );

        for response in responses.iter().filter(|r| r.has_errors()) {
            for error in response.errors() {
                output.push_str(&format!("\n  error: {}", error));
            }
        }

        Ok(output)
    }
}
