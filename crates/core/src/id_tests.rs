use super::*;

#[test]
fn uuid_id_gen_produces_32_char_lowercase_hex() {
    let gen = UuidIdGen;
    let id = gen.next();
    assert_eq!(id.len(), 32);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn uuid_id_gen_is_unique_across_calls() {
    let gen = UuidIdGen;
    assert_ne!(gen.next(), gen.next());
}

#[test]
fn sequential_id_gen_increments() {
    let gen = SequentialIdGen::new("t");
    let a = gen.next();
    let b = gen.next();
    assert_ne!(a, b);
    assert!(a.starts_with("t-"));
}

#[test]
fn task_id_short_truncates() {
    let id = TaskId::new("abcdefgh");
    assert_eq!(id.short(4), "abcd");
    assert_eq!(id.short(100), "abcdefgh");
}

#[test]
fn task_id_equals_str() {
    let id = TaskId::new("hello");
    assert_eq!(id, "hello");
}

#[test]
fn task_id_display_matches_inner() {
    let id = ExchangeId::new("xyz");
    assert_eq!(format!("{id}"), "xyz");
}

#[test]
fn boxed_sequential_gen_still_increments() {
    let gen: Arc<dyn Fn() -> String + Send + Sync> = SequentialIdGen::new("b").boxed();
    assert_ne!(gen(), gen());
}
