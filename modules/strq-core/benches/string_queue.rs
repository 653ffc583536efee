use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use strq_core_rs::StringQueue;

const ELEMENTS: usize = 1_024;

fn filled_queue() -> StringQueue {
  let mut queue = StringQueue::new();
  for n in 0..ELEMENTS {
    queue.insert_tail(&format!("element-{n}")).unwrap();
  }
  queue
}

fn bench_fifo(c: &mut Criterion) {
  let mut group = c.benchmark_group("string_queue_fifo");
  group.bench_function("insert_tail_remove_head", |b| {
    let mut buffer = [0_u8; 32];
    b.iter(|| {
      let mut queue = StringQueue::new();
      for _ in 0..ELEMENTS {
        queue.insert_tail("payload").unwrap();
      }
      while queue.remove_head(Some(&mut buffer)).is_ok() {}
    });
  });
  group.bench_function("insert_head_remove_head", |b| {
    b.iter(|| {
      let mut queue = StringQueue::new();
      for _ in 0..ELEMENTS {
        queue.insert_head("payload").unwrap();
      }
      while queue.remove_head(None).is_ok() {}
    });
  });
  group.finish();
}

fn bench_reverse(c: &mut Criterion) {
  let mut group = c.benchmark_group("string_queue_reverse");
  group.bench_function("reverse", |b| {
    b.iter_batched(
      filled_queue,
      |mut queue| {
        queue.reverse();
        queue
      },
      BatchSize::SmallInput,
    );
  });
  group.finish();
}

criterion_group!(benches, bench_fifo, bench_reverse);
criterion_main!(benches);
