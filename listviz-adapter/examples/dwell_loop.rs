use listviz::{EngineOptions, Operation};
use listviz_adapter::{Controller, Dwell};

fn main() {
    // Example: a view loop that forwards clicks and ticks a frame clock.
    //
    // An adapter would:
    // - call submit() with the raw text of its value/position fields on click
    // - call tick(now_ms) from a frame loop or a timer armed at next_deadline()
    // - render status() and the engine's nodes
    let mut c = Controller::new(EngineOptions::new(), Dwell::default());

    let clicks = [
        (0u64, Operation::InsertAtTail, "10", ""),
        (100, Operation::InsertAtTail, "20", ""),
        (200, Operation::InsertAtHead, "5", ""),
        (400, Operation::Search, "20", ""),
        (500, Operation::DeleteAtPosition, "", "7"),
    ];

    let mut now_ms = 0u64;
    let mut next_click = 0;
    while now_ms <= 4_000 {
        while let Some(&(at, op, value, position)) = clicks.get(next_click) {
            if at > now_ms {
                break;
            }
            if let Some(r) = c.submit(op, value, position, now_ms) {
                println!("t={now_ms} {} -> {:?}", op.label(), r.outcome);
            }
            next_click += 1;
        }

        if c.tick(now_ms) {
            println!(
                "t={now_ms} cleared: status={:?} new={:?} highlight={:?}",
                c.status().map(|m| m.text.as_str()),
                c.engine().new_index(),
                c.engine().highlight_index()
            );
        }
        now_ms += 16;
    }

    println!("values={:?} idle={}", c.engine().values(), c.is_idle());
}
