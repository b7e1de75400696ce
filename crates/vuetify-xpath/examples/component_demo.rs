//! Component Demo - Vuetify Selector Construction
//!
//! Demonstrates building XPath selectors for Vuetify components, from the
//! single-argument convenience form to fully named options.
//!
//! # Running
//!
//! ```bash
//! cargo run --example component_demo -p vuetify-xpath
//! ```

#![allow(clippy::uninlined_format_args)]

use vuetify_xpath::prelude::*;

fn main() {
    println!("=== Vuetify XPath Demo ===\n");

    demo_default_parameters();
    demo_named_options();
    demo_descriptors();
    demo_queries();

    println!("\n=== Demo Complete ===");
}

fn demo_default_parameters() {
    println!("--- Demo 1: Default Parameters ---\n");

    // Each component has a designated default parameter.
    println!("button by content:\n  {}", v_btn("Save"));
    println!("card by content:\n  {}", v_card("Welcome"));
    println!("icon by glyph class:\n  {}", v_icon("mdi-home"));
    println!("image by source substring:\n  {}", v_img("logo.png"));
    println!("text field by label:\n  {}", v_text_field("Username"));

    println!();
}

fn demo_named_options() {
    println!("--- Demo 2: Named Options ---\n");

    let submit = VBtn::new("Submit")
        .css_class("primary")
        .disabled(false)
        .xpath();
    println!("enabled primary submit button:\n  {}", submit);

    let card = VCard::default()
        .title("Settings")
        .subtitle("Appearance")
        .actions("OK")
        .xpath();
    println!("card with named regions:\n  {}", card);

    let item = VListItem::default().title("Inbox").icon("mdi-email").xpath();
    println!("list item with title and icon regions:\n  {}", item);

    println!();
}

fn demo_descriptors() {
    println!("--- Demo 3: Descriptors ---\n");

    // A sequence requires every entry; an XPath-shaped entry matches a
    // contained element instead of text.
    let chip = v_chip(["Alice", "//img"]);
    println!("chip with text and a nested element:\n  {}", chip);

    let unconstrained = VToolbar::default().xpath();
    println!("any toolbar:\n  {}", unconstrained);

    println!();
}

fn demo_queries() {
    println!("--- Demo 4: DOM Query Rendering ---\n");

    let xpath = v_btn("Save");
    println!("first-match query:\n  {}", xpath.to_query());
    println!("count query:\n  {}", xpath.to_count_query());

    println!();
}
