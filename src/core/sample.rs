//! Evaluating the watched function into displayable text.

use std::{
    any::Any,
    fmt::Display,
    panic::{self, AssertUnwindSafe},
};

use tracing::debug;

/// Something the watch loop can evaluate once per frame.
///
/// Closures returning `anyhow::Result<impl Display>` implement this
/// directly.
pub trait Sampler {
    fn sample(&mut self) -> anyhow::Result<String>;
}

impl<F, T> Sampler for F
where
    F: FnMut() -> anyhow::Result<T>,
    T: Display,
{
    #[inline]
    fn sample(&mut self) -> anyhow::Result<String> {
        self().map(|v| v.to_string())
    }
}

/// Outcome of one evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sample {
    Value(String),
    /// The sampler returned an error; holds the message and cause chain.
    Failed(String),
    /// The sampler panicked; holds the panic message.
    Panicked(String),
}

impl Sample {
    /// Run `sampler` once, turning errors and panics into text.
    pub fn capture<S: Sampler + ?Sized>(sampler: &mut S) -> Self {
        match panic::catch_unwind(AssertUnwindSafe(|| sampler.sample())) {
            Ok(Ok(text)) => Self::Value(text),
            Ok(Err(err)) => {
                debug!(error = %err, "sample failed");
                Self::Failed(format!("{err:?}"))
            }
            Err(payload) => {
                let msg = panic_message(payload.as_ref());
                debug!(panic = %msg, "sampler panicked");
                Self::Panicked(format!("sampler panicked: {msg}"))
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Value(s) | Self::Failed(s) | Self::Panicked(s) => s,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_failure(&self) -> bool {
        !matches!(self, Self::Value(_))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "<non-string panic payload>".to_owned()
    }
}
