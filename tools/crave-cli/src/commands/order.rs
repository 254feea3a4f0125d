//! Scripted ordering.

use anyhow::{bail, Context as _, Result};
use crave_commerce::storefront::{Intent, Storefront};

use super::{render_view, OrderArgs};
use crate::context::Context;
use crate::notifier::ConsoleNotifier;

/// Run the order command.
pub fn run(args: OrderArgs, ctx: &Context) -> Result<()> {
    let intents = collect_intents(&args, ctx)?;
    if intents.is_empty() {
        bail!("Nothing to do: pass a script file or at least one --step");
    }

    let notifier = ConsoleNotifier::new(
        ctx.output.clone(),
        ctx.config.store.currency_symbol.clone(),
    );
    let mut store = Storefront::new(ctx.catalog.clone(), notifier);

    let mut failures = 0usize;
    for (index, intent) in intents.into_iter().enumerate() {
        let step = index + 1;
        ctx.output.debug(&format!("step {}: {}", step, intent));

        if let Err(e) = store.dispatch(intent.clone()) {
            if !args.keep_going {
                return Err(e).with_context(|| format!("step {} ({}) failed", step, intent));
            }
            failures += 1;
            ctx.output.warn(&format!("step {} ({}) failed: {}", step, intent, e));
            continue;
        }

        if args.trace {
            render_view(ctx, &store.view());
        }
    }

    if !args.trace {
        render_view(ctx, &store.view());
    }
    tracing::debug!(failures, items = store.item_count(), "Script finished");
    if failures > 0 {
        ctx.output.warn(&format!("{} step(s) failed", failures));
    }

    Ok(())
}

fn collect_intents(args: &OrderArgs, ctx: &Context) -> Result<Vec<Intent>> {
    let mut intents = Vec::new();

    if let Some(script) = &args.script {
        let path = ctx.cwd.join(script);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read script: {}", path.display()))?;

        let parsed = if script.ends_with(".json") {
            Intent::list_from_json(&content)
        } else {
            Intent::parse_script(&content)
        };
        intents.extend(parsed.with_context(|| format!("Invalid script: {}", path.display()))?);
    }

    for step in &args.steps {
        let intent = step
            .parse::<Intent>()
            .with_context(|| format!("Invalid --step: {:?}", step))?;
        intents.push(intent);
    }

    Ok(intents)
}
