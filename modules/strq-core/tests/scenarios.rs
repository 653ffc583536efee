use strq_core_rs::{handle, QueueError, RemoveOutcome, StringQueue, TERMINATOR};

fn text_of(buffer: &[u8]) -> &str {
  let end = buffer.iter().position(|&byte| byte == TERMINATOR).unwrap();
  std::str::from_utf8(&buffer[..end]).unwrap()
}

#[test]
fn fifo_then_reverse_scenario() {
  let mut queue = StringQueue::new();
  queue.insert_tail("a").unwrap();
  queue.insert_tail("b").unwrap();
  queue.insert_tail("c").unwrap();
  assert_eq!(queue.len(), 3);

  let mut buffer = [0_u8; 10];
  assert!(queue.remove_head(Some(&mut buffer)).is_ok());
  assert_eq!(text_of(&buffer), "a");
  assert_eq!(queue.len(), 2);

  queue.reverse();
  queue.remove_head(Some(&mut buffer)).unwrap();
  assert_eq!(text_of(&buffer), "c");
}

#[test]
fn single_byte_buffer_receives_only_terminator() {
  let mut queue = handle::create();
  assert!(handle::insert_head(queue.as_mut(), "x"));

  let mut buffer = [b'?'; 1];
  assert!(handle::remove_head(queue.as_mut(), Some(&mut buffer)));
  assert_eq!(text_of(&buffer), "");
  assert_eq!(handle::size(queue.as_ref()), 0);

  handle::destroy(queue);
}

#[test]
fn lifo_access_through_insert_head() {
  let mut queue = StringQueue::default();
  for text in ["one", "two", "three"] {
    queue.insert_head(text).unwrap();
  }

  let mut buffer = [0_u8; 16];
  let mut seen = Vec::new();
  while queue.remove_head(Some(&mut buffer)).is_ok() {
    seen.push(text_of(&buffer).to_owned());
  }
  assert_eq!(seen, ["three", "two", "one"]);
  assert_eq!(queue.remove_head(None), Err(QueueError::Empty));
}

#[test]
fn long_text_is_truncated_but_terminated() {
  let long = "x".repeat(1024);
  let mut queue = StringQueue::new();
  queue.insert_tail(&long).unwrap();

  let mut buffer = [0_u8; 32];
  let outcome = queue.remove_head(Some(&mut buffer)).unwrap();
  assert_eq!(outcome, RemoveOutcome::Copied { written: 31, truncated: true });
  assert_eq!(text_of(&buffer), &long[..31]);
  assert!(queue.is_empty());
}

#[test]
fn queue_is_reusable_after_draining() {
  let mut queue = StringQueue::new();
  for round in 0..4 {
    for n in 0..8 {
      queue.insert_tail(&format!("{round}-{n}")).unwrap();
    }
    while queue.remove_head(None).is_ok() {}
    assert!(queue.is_empty());
    assert_eq!(format!("{queue:?}"), "[]");
  }
}

#[test]
fn error_messages_are_descriptive() {
  assert_eq!(QueueError::Empty.to_string(), "queue is empty");
  assert_eq!(QueueError::AllocError.to_string(), "failed to allocate queue storage");
}
