//! Log output emitted by the frame codec.

mod common;

use log::Level;
use packframe::{FrameCodec, RawPayload};
use rstest::rstest;

use crate::common::{LoggerHandle, logger};

#[rstest]
fn header_mismatch_is_warned(mut logger: LoggerHandle) {
    logger.clear();
    let codec = FrameCodec::with_payload(RawPayload::default());
    codec
        .unpack(&[0x00, 0x00, 0x00, 0x09, 0x01, 0x02])
        .expect("mismatched header still unpacks");

    let records = logger.drain();
    let warned = records.iter().any(|(level, message)| {
        *level == Level::Warn
            && message.contains("announced=9")
            && message.contains("actual=2")
    });
    assert!(warned, "missing mismatch warning: {records:?}");
}

#[rstest]
fn consistent_frame_is_not_warned(mut logger: LoggerHandle) {
    logger.clear();
    let sender = FrameCodec::with_payload(RawPayload::from(vec![1, 2, 3]));
    let frame = sender.pack_to_bytes().expect("pack");
    let receiver = FrameCodec::with_payload(RawPayload::default());
    receiver.unpack(&frame).expect("unpack");

    let records = logger.drain();
    assert!(
        records.iter().all(|(level, _)| *level != Level::Warn),
        "unexpected warning: {records:?}"
    );
    assert!(
        records
            .iter()
            .any(|(level, message)| *level == Level::Debug && message.contains("body_len=3")),
        "missing pack/unpack debug records: {records:?}"
    );
}

#[rstest]
fn failures_are_logged(mut logger: LoggerHandle) {
    logger.clear();
    let codec: FrameCodec<RawPayload> = FrameCodec::default();
    assert!(codec.pack_to_bytes().is_err());

    let records = logger.drain();
    assert!(
        records
            .iter()
            .any(|(_, message)| message.contains("pack failed")
                && message.contains("no payload referenced")),
        "missing failure record: {records:?}"
    );
}
