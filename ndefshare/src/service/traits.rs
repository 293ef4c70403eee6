// ndefshare/src/service/traits.rs

use crate::Result;
use crate::types::{ModeId, TechId};

/// NfcService trait abstracts the NFC coordination daemon away from the
/// registration logic.
///
/// Every method only *issues* an asynchronous request; `Err` means the
/// request could not even be sent. Completions are reported back to the
/// engine as [`RegistrationEvent`](crate::registration::RegistrationEvent)s
/// by whatever owns the bus connection. The release/unregister calls are
/// fire-and-forget: no completion is ever delivered for them.
pub trait NfcService {
    /// Register the emulation endpoint under `path`, declaring the
    /// application identifier and registration flags.
    fn register_local_host_app(
        &mut self,
        path: &str,
        name: &str,
        aid: &[u8],
        flags: u32,
    ) -> Result<()>;

    /// Request the listening/polling mode bits in `enable` while disabling
    /// those in `disable`. The daemon answers with a mode grant id.
    fn request_mode(&mut self, enable: u32, disable: u32) -> Result<()>;

    /// Request the technology bits in `allow` exclusively, disallowing
    /// those in `disallow`. The daemon answers with a technology grant id.
    fn request_techs(&mut self, allow: u32, disallow: u32) -> Result<()>;

    /// Give back a granted technology set.
    fn release_techs(&mut self, id: TechId) -> Result<()>;

    /// Give back a granted mode.
    fn release_mode(&mut self, id: ModeId) -> Result<()>;

    /// Withdraw the endpoint registration at `path`.
    fn unregister_local_host_app(&mut self, path: &str) -> Result<()>;
}
