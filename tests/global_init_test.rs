//! `init_global` dengan config custom
//!
//! Binary terpisah: buffer global harus di-init sebelum
//! `pack`/`unpack` pertama di proses ini.

use hermes_frame::core::{global, init_global};
use hermes_frame::{pack, unpack, EncodeError, Frame, FrameConfig, FrameError};

#[test]
fn test_init_global_with_custom_capacity() {
    let config = FrameConfig::with_capacity(64);
    let shared = init_global(&config).unwrap();
    assert_eq!(shared.capacity(), 64);
    assert_eq!(global().capacity(), 64);

    assert_eq!(unpack().unwrap(), Frame::default());

    pack(0, 0x1234, 56, vec![b'z'; 56]).unwrap();
    assert_eq!(unpack().unwrap().payload, vec![b'z'; 56]);

    assert_eq!(
        pack(0, 0x1234, 57, vec![b'z'; 57]),
        Err(EncodeError::BufferOverflow {
            declared: 57,
            available: 56
        })
    );

    assert!(matches!(
        init_global(&FrameConfig::default()),
        Err(FrameError::AlreadyInitialized)
    ));
    assert_eq!(global().capacity(), 64);
}
