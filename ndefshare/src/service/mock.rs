// ndefshare/src/service/mock.rs

use std::cell::RefCell;
use std::rc::Rc;

use crate::service::traits::NfcService;
use crate::types::{ModeId, TechId};
use crate::{Error, Result};

/// One recorded daemon request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceCall {
    RegisterLocalHostApp {
        path: String,
        name: String,
        aid: Vec<u8>,
        flags: u32,
    },
    RequestMode {
        enable: u32,
        disable: u32,
    },
    RequestTechs {
        allow: u32,
        disallow: u32,
    },
    ReleaseTechs(u32),
    ReleaseMode(u32),
    UnregisterLocalHostApp {
        path: String,
    },
}

/// Mock NFC service for unit tests. It records issued requests and can be
/// scripted to fail issuance.
#[derive(Debug, Default)]
pub struct MockNfcService {
    /// Requests in issue order.
    pub calls: Vec<ServiceCall>,
    /// Testing hook: number of subsequent requests that should fail to issue
    pub issue_failures: usize,
}

impl MockNfcService {
    /// Empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle usable both as the engine's service and for later
    /// inspection from the test (the engine consumes its service by value).
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Set how many subsequent requests should fail to issue (for tests).
    pub fn set_issue_failures(&mut self, n: usize) {
        self.issue_failures = n;
    }

    fn issue(&mut self, method: &'static str, call: ServiceCall) -> Result<()> {
        if self.issue_failures > 0 {
            self.issue_failures -= 1;
            return Err(Error::Service {
                method,
                reason: "scripted issue failure".to_string(),
            });
        }
        self.calls.push(call);
        Ok(())
    }
}

impl NfcService for MockNfcService {
    fn register_local_host_app(
        &mut self,
        path: &str,
        name: &str,
        aid: &[u8],
        flags: u32,
    ) -> Result<()> {
        self.issue(
            "RegisterLocalHostApp",
            ServiceCall::RegisterLocalHostApp {
                path: path.to_string(),
                name: name.to_string(),
                aid: aid.to_vec(),
                flags,
            },
        )
    }

    fn request_mode(&mut self, enable: u32, disable: u32) -> Result<()> {
        self.issue("RequestMode", ServiceCall::RequestMode { enable, disable })
    }

    fn request_techs(&mut self, allow: u32, disallow: u32) -> Result<()> {
        self.issue("RequestTechs", ServiceCall::RequestTechs { allow, disallow })
    }

    fn release_techs(&mut self, id: TechId) -> Result<()> {
        self.issue("ReleaseTechs", ServiceCall::ReleaseTechs(id.as_u32()))
    }

    fn release_mode(&mut self, id: ModeId) -> Result<()> {
        self.issue("ReleaseMode", ServiceCall::ReleaseMode(id.as_u32()))
    }

    fn unregister_local_host_app(&mut self, path: &str) -> Result<()> {
        self.issue(
            "UnregisterLocalHostApp",
            ServiceCall::UnregisterLocalHostApp {
                path: path.to_string(),
            },
        )
    }
}

// The engine runs on a single event loop, so a shared-cell handle is enough
// for tests that need to inspect the mock after the engine is dropped.
impl NfcService for Rc<RefCell<MockNfcService>> {
    fn register_local_host_app(
        &mut self,
        path: &str,
        name: &str,
        aid: &[u8],
        flags: u32,
    ) -> Result<()> {
        self.borrow_mut()
            .register_local_host_app(path, name, aid, flags)
    }

    fn request_mode(&mut self, enable: u32, disable: u32) -> Result<()> {
        self.borrow_mut().request_mode(enable, disable)
    }

    fn request_techs(&mut self, allow: u32, disallow: u32) -> Result<()> {
        self.borrow_mut().request_techs(allow, disallow)
    }

    fn release_techs(&mut self, id: TechId) -> Result<()> {
        self.borrow_mut().release_techs(id)
    }

    fn release_mode(&mut self, id: ModeId) -> Result<()> {
        self.borrow_mut().release_mode(id)
    }

    fn unregister_local_host_app(&mut self, path: &str) -> Result<()> {
        self.borrow_mut().unregister_local_host_app(path)
    }
}
