// Runs as its own test binary: the global store must stay untouched for
// the not-initialized checks to hold.

#[test]
fn uninitialized_store_is_rejected() {
    let err = mem_counters::increment("early", 1).unwrap_err();
    assert!(err.to_string().contains("not initialized"));
    assert!(mem_counters::rate("early").is_err());
    assert!(mem_counters::list().is_err());

    mem_counters::init_default().unwrap();
    assert_eq!(mem_counters::increment("early", 1).unwrap(), 1);

    // a second init attaches to the existing store instead of replacing it
    mem_counters::init_default().unwrap();
    assert_eq!(mem_counters::increment("early", 0).unwrap(), 1);

    mem_counters::reset_global_store();
    assert!(mem_counters::increment("early", 1).is_err());
}
