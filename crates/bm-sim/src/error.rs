use bm_core::BmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] BmError),

    #[error("batch of {0} trials exceeds the TrialId range")]
    TooManyTrials(usize),
}

pub type SimResult<T> = Result<T, SimError>;
