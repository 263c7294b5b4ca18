#![no_main]
use arbitrary::Arbitrary;
use expdiv::{Engine, State, divide};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
pub enum Operation {
    Divide(u32, u32),
    Load(u32, u32),
    Tick,
    Cancel,
    Take,
}

fuzz_target!(|operations: Vec<Operation>| {
    let mut engine = Engine::new();
    let mut latched = None;

    for op in operations {
        match op {
            Operation::Divide(a, b) => {
                let expected = a.checked_div(b).filter(|_| a != 0);
                assert_eq!(divide(a, b).ok(), expected);
            }
            Operation::Load(a, b) => {
                if engine.load(a, b).is_ok() {
                    latched = Some((a, b));
                }
            }
            Operation::Tick => {
                if engine.tick().unwrap() == State::Idle {
                    if let (Some(result), Some((a, b))) = (engine.result(), latched) {
                        assert_eq!(result, divide(a, b));
                    }
                }
            }
            Operation::Cancel => {
                if engine.cancel() {
                    assert_eq!(engine.result(), None);
                }
            }
            Operation::Take => {
                engine.take_result();
            }
        }
    }
});
