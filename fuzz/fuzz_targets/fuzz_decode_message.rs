#![no_main]

use bytes::BytesMut;
use cassis_wire::protocol::decode_message;
use cassis_wire::Packet;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut buf = BytesMut::from(data);

    // Split and decode frames in a loop to simulate multiple messages
    // arriving in a single TCP segment.
    loop {
        match Packet::parse(&mut buf) {
            Ok(Some(packet)) => {
                let _ = decode_message(&packet);
            }
            Ok(None) | Err(_) => break,
        }
    }
});
