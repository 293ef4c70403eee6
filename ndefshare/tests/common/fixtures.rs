// fixtures.rs — provides commonly used messages and APDUs

use ndefshare::protocol::Apdu;

/// 10-byte message; the NDEF file around it is 12 bytes.
pub const SAMPLE_MESSAGE: &[u8] = b"hello nfc!";

/// Object path of the simulated reader host, used by the lifecycle hooks.
pub const HOST: &str = "/connection/host0";

pub fn read_all() -> Apdu<'static> {
    Apdu::read_binary(0, 0)
}

/// Route crate logs to the test harness output.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
