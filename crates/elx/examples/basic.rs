//! Example: Basic usage of elx

use std::cell::Cell;
use std::rc::Rc;

use elx::{attrs, listener, BoundTag, Builder, Document, Event, StyleValue};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut doc = Document::new("about:blank");
    let body = doc.body();
    let mut b = Builder::new(&mut doc);

    let clicks = Rc::new(Cell::new(0));
    let counter = clicks.clone();

    let item = BoundTag::with_attributes("li.item", attrs! { "role" => "listitem" });
    let first = item.call(&mut b, ("first",))?;
    let second = item.call(&mut b, (attrs! { "class" => "active" }, ["<second>"]))?;

    let list = b.h((
        "ul#menu.nav",
        attrs! {
            "style" => StyleValue::map([("margin", "0"), ("padding", "0")]),
            "onClick" => listener(move |_| counter.set(counter.get() + 1)),
        },
        vec![first, second],
    ))?;
    let icon = b.svg(r#"<circle cx="5" cy="5" r="4"/>"#)?;
    let app = b.h(("main", attrs! { "id" => "app" }, vec![list, icon]))?;
    b.append(body, app)?;

    println!("elx v{}", elx::VERSION);
    println!("{}", b.outer_html(app));

    let tree = b.document().tree();
    tree.dispatch_event(first.id(), &mut Event::new("click"))?;
    println!("clicks: {}", clicks.get());

    if let Some(found) = b.by_id("menu", None) {
        println!("found <{}>", found.tag_name().unwrap_or_default());
    }
    Ok(())
}
