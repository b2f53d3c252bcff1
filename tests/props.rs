use std::collections::VecDeque;
use intlist::List;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
  AddFront(i32),
  AddBack(i32),
  AddAt(i32, usize),
  RemoveFront,
  RemoveBack,
  RemoveAt(usize),
  Clear,
  ShrinkToFit,
}

// Small values and indices so that lookups hit and indices land in range.

fn op() -> impl Strategy<Value = Op> {
  prop_oneof![
    4 => (-8 .. 8).prop_map(Op::AddFront),
    4 => (-8 .. 8).prop_map(Op::AddBack),
    4 => ((-8 .. 8), (0_usize .. 12)).prop_map(|(v, i)| Op::AddAt(v, i)),
    2 => Just(Op::RemoveFront),
    2 => Just(Op::RemoveBack),
    3 => (0_usize .. 12).prop_map(Op::RemoveAt),
    1 => Just(Op::Clear),
    1 => Just(Op::ShrinkToFit),
  ]
}

fn render(model: &VecDeque<i32>) -> String {
  let mut s = String::new();
  for x in model {
    s.push_str(&format!("{x}->"));
  }
  s.push_str("NULL");
  s
}

proptest! {
  #[test]
  fn test_agrees_with_model(ops in prop::collection::vec(op(), 0 .. 200)) {
    let mut list = List::new();
    let mut model = VecDeque::new();

    for op in ops {
      match op {
        Op::AddFront(v) => {
          list.add_front(v);
          model.push_front(v);
        }
        Op::AddBack(v) => {
          list.add_back(v);
          model.push_back(v);
        }
        Op::AddAt(v, i) => {
          let valid = 1 <= i && i <= model.len() + 1;
          prop_assert_eq!(list.add_at(v, i), valid);
          if valid { model.insert(i - 1, v); }
        }
        Op::RemoveFront => {
          prop_assert_eq!(list.remove_front(), model.pop_front());
        }
        Op::RemoveBack => {
          prop_assert_eq!(list.remove_back(), model.pop_back());
        }
        Op::RemoveAt(i) => {
          let expected = if i == 0 { None } else { model.remove(i - 1) };
          prop_assert_eq!(list.remove_at(i), expected);
        }
        Op::Clear => {
          list.clear();
          model.clear();
        }
        Op::ShrinkToFit => {
          list.shrink_to_fit();
          prop_assert_eq!(list.capacity(), model.len());
        }
      }

      prop_assert_eq!(list.len(), model.len());
      prop_assert_eq!(list.front(), model.front().copied());
      prop_assert_eq!(list.back(), model.back().copied());
      prop_assert_eq!(list.to_string(), render(&model));

      for v in -8 .. 8 {
        prop_assert_eq!(list.contains(v), model.contains(&v));
        prop_assert_eq!(list.index_of(v), model.iter().position(|&x| x == v).map(|i| i + 1));
      }

      for i in 0 ..= model.len() + 1 {
        let expected = if i == 0 { None } else { model.get(i - 1).copied() };
        prop_assert_eq!(list.value_at(i), expected);
      }
    }
  }

  #[test]
  fn test_len_counts_add_back(xs in prop::collection::vec(any::<i32>(), 0 .. 300)) {
    let mut list = List::new();
    for &x in &xs {
      list.add_back(x);
    }
    prop_assert_eq!(list.len(), xs.len());
    prop_assert!(list.iter().eq(xs.iter().copied()));
  }

  #[test]
  fn test_index_of_new_back_is_len(xs in prop::collection::vec(0 .. 1000, 0 .. 50), v in 1000 .. 2000) {
    let mut list: List = xs.into_iter().collect();
    list.add_back(v);
    prop_assert_eq!(list.index_of(v), Some(list.len()));
  }

  #[test]
  fn test_add_at_one_is_add_front(xs in prop::collection::vec(any::<i32>(), 0 .. 50), v in any::<i32>()) {
    let mut a: List = xs.iter().copied().collect();
    let mut b: List = xs.iter().copied().collect();
    prop_assert!(a.add_at(v, 1));
    b.add_front(v);
    prop_assert_eq!(a, b);
  }

  #[test]
  fn test_display_joins_values(xs in prop::collection::vec(any::<i32>(), 0 .. 50)) {
    let list: List = xs.iter().copied().collect();
    let mut expected: Vec<String> = xs.iter().map(|x| x.to_string()).collect();
    expected.push("NULL".to_string());
    prop_assert_eq!(list.to_string(), expected.join("->"));
  }
}
