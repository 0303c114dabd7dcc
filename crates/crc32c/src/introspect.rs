//! Dispatch introspection.
//!
//! Lets callers confirm which kernel is in use without touching the hot path.
//!
//! ```
//! use crc32c::DispatchInfo;
//!
//! let info = DispatchInfo::current();
//! println!("{info}");
//! assert!(info.backend().is_available());
//! ```

use core::fmt;

use crate::{
  Backend,
  config::{self, Crc32cConfig},
  dispatch,
};

/// Snapshot of the engine's backend selection.
///
/// Cheap to build after first use: both the configuration and the selected
/// backend are resolved once per process.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct DispatchInfo {
  backend: Backend,
  config: Crc32cConfig,
}

impl DispatchInfo {
  #[inline]
  #[must_use]
  pub fn current() -> Self {
    Self {
      backend: dispatch::selected_backend(),
      config: config::get(),
    }
  }

  /// The backend [`value`](crate::value) and [`extend`](crate::extend) run on.
  #[inline]
  #[must_use]
  pub const fn backend(&self) -> Backend {
    self.backend
  }

  #[inline]
  #[must_use]
  pub const fn config(&self) -> Crc32cConfig {
    self.config
  }

  /// Backends this process could run, in [`Backend::ALL`] order.
  pub fn available() -> impl Iterator<Item = Backend> {
    Backend::ALL.into_iter().filter(|backend| backend.is_available())
  }
}

impl fmt::Display for DispatchInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "crc32c: {}", self.backend.name())?;
    if self.config.requested_force != config::Crc32cForce::Auto {
      write!(
        f,
        " (forced {}, effective {})",
        self.config.requested_force, self.config.effective_force
      )?;
    }
    Ok(())
  }
}

impl fmt::Debug for DispatchInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DispatchInfo")
      .field("backend", &format_args!("{}", self.backend.name()))
      .field("requested_force", &self.config.requested_force)
      .field("effective_force", &self.config.effective_force)
      .finish()
  }
}
