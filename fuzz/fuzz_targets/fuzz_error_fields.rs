#![no_main]

use cassis_wire::protocol::{decode_error_response, decode_notice_response};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The field-stream reader and SQLSTATE classifier must never panic,
    // whatever the body contains.
    let _ = decode_error_response(data);
    let _ = decode_notice_response(data);
});
