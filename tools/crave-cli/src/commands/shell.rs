//! Interactive ordering session.

use anyhow::{bail, Result};
use crave_commerce::storefront::{Intent, Storefront};
use dialoguer::Input;

use super::{render_view, ShellArgs};
use crate::context::Context;
use crate::notifier::ConsoleNotifier;

const HELP: [&str; 14] = [
    "add <product-id>          add a product (flavored ones ask for a flavor)",
    "flavor <name>             pick the flavor for the pending product",
    "cancel-flavor             close the flavor picker",
    "qty <item-id> <+n|-n>     change a cart line quantity",
    "remove <item-id>          remove a cart line",
    "category <all|with-coffee|no-coffee|meal>",
    "search <text>             filter by name or description",
    "open-cart / close-cart",
    "checkout                  open the order confirmation",
    "cancel-checkout",
    "confirm                   place the order",
    "view                      show the storefront",
    "help                      show this list",
    "quit                      leave the shell",
];

/// Run the shell command.
pub fn run(args: ShellArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() || !ctx.output.is_interactive() {
        bail!("The shell needs an interactive terminal; use `crave order` for scripts");
    }

    let notifier = ConsoleNotifier::new(
        ctx.output.clone(),
        ctx.config.store.currency_symbol.clone(),
    );
    let mut store = Storefront::new(ctx.catalog.clone(), notifier);

    ctx.output.header(&format!("Welcome to {}", ctx.config.store.name));
    ctx.output.info("Type `help` for commands.");
    render_view(ctx, &store.view());

    loop {
        let prompt = match store.pending_product() {
            Some(product) => format!("crave [flavor for {}]", product.id),
            None => "crave".to_string(),
        };
        let line: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;

        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                for entry in HELP {
                    ctx.output.list_item(entry);
                }
            }
            "view" => render_view(ctx, &store.view()),
            text => match text.parse::<Intent>() {
                Ok(intent) => match store.dispatch(intent) {
                    Ok(()) if args.show => render_view(ctx, &store.view()),
                    Ok(()) => print_status(ctx, &store),
                    Err(e) => ctx.output.warn(&e.to_string()),
                },
                Err(e) => ctx.output.warn(&e.to_string()),
            },
        }
    }

    Ok(())
}

fn print_status(ctx: &Context, store: &Storefront<ConsoleNotifier>) {
    if let Some(product) = store.pending_product() {
        let names: Vec<&str> = store.catalog().flavors().iter().map(|f| f.name.as_str()).collect();
        ctx.output
            .info(&format!("Choose a flavor for {}: {}", product.name, names.join(", ")));
        return;
    }
    if let Some(summary) = store.order_summary() {
        ctx.output.info(&format!(
            "Confirm order of {} item(s) for {}? (confirm / cancel-checkout)",
            summary.item_count,
            ctx.price(summary.subtotal)
        ));
        return;
    }
    ctx.output.kv(
        "cart",
        &format!("{} item(s), {}", store.item_count(), ctx.price(store.subtotal())),
    );
}
