// Example: drive the engine directly and print what a view would render.
use listviz::{Engine, NodeView, Operation};

fn render(e: &Engine) -> String {
    if e.is_empty() {
        return "Empty list - Add some nodes!".to_string();
    }
    let mut out = String::new();
    e.for_each_node(|n: NodeView| {
        let role = if n.is_head {
            "H:"
        } else if n.is_tail {
            "T:"
        } else {
            ""
        };
        let mark = if n.is_highlighted {
            "*"
        } else if n.is_new {
            "+"
        } else {
            ""
        };
        out.push_str(&format!("({role}{}{mark})", n.value));
        if n.has_next() {
            out.push_str(" -> ");
        }
    });
    out
}

fn main() {
    let mut e = Engine::new();
    println!("{}", render(&e));

    for r in [
        e.insert_at_tail(10),
        e.insert_at_tail(20),
        e.insert_at_head(5),
        e.insert_at_position(7, 9),
        e.delete_at_position(1),
        e.search(20),
        e.reverse(),
    ] {
        let text = r.message.as_ref().map_or("", |m| m.text.as_str());
        println!("{:<20} {:?}: {text}", r.op.label(), r.outcome);
    }
    println!("{}", render(&e));

    for op in Operation::ALL {
        println!("{:<20} {}", op.label(), op.complexity());
    }
}
