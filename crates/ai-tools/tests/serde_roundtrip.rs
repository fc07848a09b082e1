#![cfg(feature = "serde")]

use ai_tools::{TraceEvent, TraceLog};

#[test]
fn trace_log_json_roundtrip() {
    let log = TraceLog {
        events: vec![
            TraceEvent::new(0, "valid", "root"),
            TraceEvent::new(1, "goap.leaf", "get_c").with_detail("cost=2"),
            TraceEvent::new(1, "outcome", "root").with_detail("succeeded"),
        ],
    };

    let json = serde_json::to_string(&log).expect("serialize");
    let roundtrip: TraceLog = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(roundtrip, log);
}
