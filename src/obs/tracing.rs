// self
use crate::{
	_prelude::*,
	obs::{CallbackSource, ConfigureOutcome, ReservedPathOutcome},
};

/// A span builder used while configuring a provider.
#[derive(Clone, Debug)]
pub struct ConfigureSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl ConfigureSpan {
	/// Creates a new span tagged with the provider's authentication type.
	pub fn new(provider: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"backoffice_auth.configure",
				provider,
				callback = tracing::field::Empty
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = provider;

			Self {}
		}
	}

	/// Enters the span for the remainder of the configuration call.
	pub fn entered(self) -> ConfigureSpanGuard {
		#[cfg(feature = "tracing")]
		{
			ConfigureSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			ConfigureSpanGuard {}
		}
	}
}

/// RAII guard returned by [`ConfigureSpan::entered`].
pub struct ConfigureSpanGuard {
	#[cfg(feature = "tracing")]
	guard: tracing::span::EnteredSpan,
}
impl ConfigureSpanGuard {
	/// Records where the provider's callback path came from on the entered span.
	pub fn record_callback(&self, source: CallbackSource) {
		#[cfg(feature = "tracing")]
		{
			self.guard.record("callback", source.as_str());
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = source;
		}
	}
}
impl Debug for ConfigureSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("ConfigureSpanGuard(..)")
	}
}

/// Emits a debug event when a configuration call finishes.
pub fn trace_configure(provider: &str, outcome: ConfigureOutcome) {
	#[cfg(feature = "tracing")]
	{
		match outcome {
			ConfigureOutcome::Success =>
				tracing::debug!(provider, outcome = outcome.as_str(), "provider configured"),
			ConfigureOutcome::Failure =>
				tracing::warn!(provider, outcome = outcome.as_str(), "provider rejected"),
		}
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (provider, outcome);
	}
}

/// Emits a debug event for a reserved-path registration.
pub fn trace_reserved_path(path: &str, outcome: ReservedPathOutcome) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(path, outcome = outcome.as_str(), "reserved path registered");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (path, outcome);
	}
}
