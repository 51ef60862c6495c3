//! # Example: counter
//!
//! The smallest useful bus: two keys, a couple of listeners, removal.
//!
//! Shows how to:
//! - Create an [`EventBus`] for a payload type.
//! - Register listeners with [`EventBus::on`] (chained via `?`).
//! - Read the "was received" boolean returned by [`EventBus::emit`].
//! - Remove a listener by handle with [`EventBus::off`].
//!
//! ## Run
//! ```bash
//! cargo run --example counter
//! ```

use std::cell::Cell;
use std::rc::Rc;

use signalbus::{listener, EventBus};

fn main() -> anyhow::Result<()> {
    let bus: EventBus<i64> = EventBus::new();
    let total = Rc::new(Cell::new(0i64));

    let t = Rc::clone(&total);
    let add = listener(move |_key: &str, delta: &i64| {
        t.set(t.get() + delta);
        Ok(())
    });
    let t = Rc::clone(&total);
    let sub = listener(move |_key: &str, delta: &i64| {
        t.set(t.get() - delta);
        Ok(())
    });

    bus.on("count:add", Rc::clone(&add))?
        .on("count:sub", Rc::clone(&sub))?;

    bus.emit("count:add", &5)?;
    bus.emit("count:add", &3)?;
    bus.emit("count:sub", &2)?;
    println!("total = {}", total.get()); // 6

    // Nobody listens on this key: emit reports it was not received.
    let received = bus.emit("count:reset", &0)?;
    println!("count:reset received = {received}");

    // Removal uses the handle you registered.
    bus.off("count:sub", &sub);
    let received = bus.emit("count:sub", &100)?;
    println!("count:sub received after off = {received}, total = {}", total.get());

    Ok(())
}
