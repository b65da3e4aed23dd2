use crate::SampleBuffer;

#[test]
fn given_capacity_three_when_four_pushed_then_oldest_evicted() {
    let mut buffer = SampleBuffer::new(3);
    for label in ["A", "B", "C", "D"] {
        buffer.push(label);
    }

    let items: Vec<_> = buffer.items().copied().collect();
    assert_eq!(items, vec!["B", "C", "D"]);
}

#[test]
fn given_fewer_pushes_than_capacity_when_items_then_all_in_arrival_order() {
    let mut buffer = SampleBuffer::new(5);
    buffer.push(1);
    buffer.push(2);

    assert_eq!(buffer.len(), 2);
    let items: Vec<_> = buffer.items().copied().collect();
    assert_eq!(items, vec![1, 2]);
}

#[test]
fn given_any_push_count_when_len_then_min_of_count_and_capacity() {
    for capacity in [1usize, 3, 8] {
        for pushes in [0usize, 1, 5, 20] {
            let mut buffer = SampleBuffer::new(capacity);
            for i in 0..pushes {
                buffer.push(i);
            }
            assert_eq!(buffer.len(), pushes.min(capacity));

            // Contents are the last `capacity` pushes in arrival order.
            let expected: Vec<_> = (pushes.saturating_sub(capacity)..pushes).collect();
            let items: Vec<_> = buffer.items().copied().collect();
            assert_eq!(items, expected);
        }
    }
}

#[test]
fn given_buffer_when_items_called_twice_then_same_sequence() {
    let mut buffer = SampleBuffer::new(3);
    buffer.push(10);
    buffer.push(20);

    let first: Vec<_> = buffer.items().copied().collect();
    let second: Vec<_> = buffer.items().copied().collect();
    assert_eq!(first, second);
}

#[test]
fn given_empty_buffer_when_inspected_then_empty() {
    let buffer: SampleBuffer<i32> = SampleBuffer::new(4);
    assert!(buffer.is_empty());
    assert_eq!(buffer.items().count(), 0);
    assert_eq!(buffer.capacity(), 4);
}
