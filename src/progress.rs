// src/progress.rs
/// Stage reporting for the fetch → structure → write pipeline.
/// Front ends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of stages.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one stage completes.
    fn stage_done(&mut self, _stage: Stage) {}

    /// Called at the end of a successful run.
    fn finish(&mut self) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Structure,
    Write,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Fetch, Stage::Structure, Stage::Write];

    pub fn label(&self) -> &'static str {
        match self {
            Stage::Fetch => "fetch",
            Stage::Structure => "structure",
            Stage::Write => "write",
        }
    }
}
