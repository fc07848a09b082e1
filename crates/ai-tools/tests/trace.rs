use std::cell::RefCell;
use std::rc::Rc;

use ai_tools::{NullTraceSink, TraceEvent, TraceLog, TraceSink, VecTraceSink};

#[derive(Clone, Default)]
struct RcSink(Rc<RefCell<Vec<TraceEvent>>>);

impl TraceSink for RcSink {
    fn emit(&mut self, event: TraceEvent) {
        self.0.borrow_mut().push(event);
    }
}

fn emit_all(sink: &mut dyn TraceSink) {
    sink.emit(TraceEvent::new(0, "valid", "root"));
    sink.emit(TraceEvent::new(1, "accept", "get_a").with_detail("plan_len=1"));
}

#[test]
fn vec_sink_collects_events_in_order() {
    let mut sink = VecTraceSink::default();
    emit_all(&mut sink);

    let log = sink.into_log();
    assert_eq!(log.events.len(), 2);
    assert_eq!(log.events[0].tag, "valid");
    assert_eq!(log.events[1].depth, 1);
    assert_eq!(log.events[1].subject, "get_a");
    assert_eq!(log.events[1].detail, "plan_len=1");
}

#[test]
fn trace_log_is_a_sink_and_filters_by_tag() {
    let mut log = TraceLog::default();
    emit_all(&mut log);
    emit_all(&mut log);

    let accepted: Vec<_> = log.with_tag("accept").map(|e| e.subject.as_ref()).collect();
    assert_eq!(accepted, vec!["get_a", "get_a"]);
}

#[test]
fn user_sinks_receive_events_through_dyn_trait() {
    let handle = RcSink::default();
    let shared = handle.0.clone();
    let mut boxed: Box<dyn TraceSink> = Box::new(handle);

    emit_all(boxed.as_mut());

    let events = shared.borrow();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].subject, "root");
}

#[test]
fn null_sink_drops_everything() {
    let mut sink = NullTraceSink;
    emit_all(&mut sink);
}
