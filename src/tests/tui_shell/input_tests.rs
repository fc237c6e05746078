use super::*;

#[test]
fn editing_handles_multibyte_chars() {
    let mut input = Input::default();
    for c in "tag=café".chars() {
        input.insert_char(c);
    }
    input.backspace();
    assert_eq!(input.buf, "tag=caf");

    input.move_home();
    input.insert_char('~');
    assert_eq!(input.buf, "~tag=caf");
    input.move_end();
    input.insert_char('é');
    assert_eq!(input.buf, "~tag=café");
}

#[test]
fn delete_at_end_is_a_no_op() {
    let mut input = Input::default();
    input.set("ab".to_string());
    input.delete();
    assert_eq!(input.buf, "ab");
    input.move_left();
    input.delete();
    assert_eq!(input.buf, "a");
}

#[test]
fn history_walks_back_and_forward() {
    let mut input = Input::default();
    input.push_history("tag=one");
    input.push_history("tag=one");
    input.push_history("tag=two");

    input.history_up();
    assert_eq!(input.buf, "tag=two");
    input.history_up();
    assert_eq!(input.buf, "tag=one");
    input.history_up();
    assert_eq!(input.buf, "tag=one");

    input.history_down();
    assert_eq!(input.buf, "tag=two");
    input.history_down();
    assert_eq!(input.buf, "");
}
