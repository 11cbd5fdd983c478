use memory::Memory;

use crate::types::ParsedRequest;

/// Receives each stage's result as a request moves through the pipeline.
///
/// Every method defaults to doing nothing, so implementors only override the
/// stages they care about.
pub trait PipelineObserver: Send {
    fn input_parsed(&mut self, _parsed: &ParsedRequest) {}

    fn memory_updated(&mut self, _memory: &Memory) {}

    fn plan_created(&mut self, _plan: &str) {}

    fn output_generated(&mut self, _output: &str) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}
