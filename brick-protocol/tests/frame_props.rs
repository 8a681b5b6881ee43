//! Property tests for bus frame construction

use brick_protocol::{BusFrame, FrameStatus, FRAME_SIZE, MAX_READ_LEN, MAX_WRITE_LEN};
use proptest::prelude::*;

proptest! {
    #[test]
    fn payload_is_copied_and_zero_padded(
        port in 0u8..4,
        address in any::<u8>(),
        register in any::<u8>(),
        payload in proptest::collection::vec(any::<u8>(), 0..=MAX_WRITE_LEN),
    ) {
        let frame = BusFrame::write(port, address, register, &payload).unwrap();
        let bytes = frame.as_bytes();

        prop_assert_eq!(bytes.len(), FRAME_SIZE);
        prop_assert_eq!(frame.port(), port);
        prop_assert_eq!(frame.address(), address >> 1);
        prop_assert_eq!(frame.register(), register);
        prop_assert_eq!(frame.write_len_field() as usize, payload.len() + 2);
        prop_assert_eq!(frame.payload(), payload.as_slice());
        prop_assert!(bytes[11 + payload.len()..41].iter().all(|&b| b == 0));
    }

    #[test]
    fn read_length_is_stored_negated(len in 0usize..=MAX_READ_LEN) {
        let frame = BusFrame::read(0, 0x02, 0x00, len).unwrap();
        prop_assert_eq!(frame.as_bytes()[41] as i8, -(len as i8));
        prop_assert_eq!(frame.reply().len(), len);
    }

    #[test]
    fn positive_status_is_busy(status in 1i32..) {
        prop_assert_eq!(FrameStatus::from_raw(status), FrameStatus::Busy);
    }

    #[test]
    fn negative_status_is_failure(status in i32::MIN..0) {
        prop_assert_eq!(FrameStatus::from_raw(status), FrameStatus::Failed(status));
    }
}
