//! Interactive prompting for generator answers.

use anyhow::{Context, Result};
use dialoguer::{Confirm, Input, Select};
use rwg_core::{Prompt, PromptKind};
use serde_json::{Map, Value};

/// Ask every prompt whose answer is not already in `values`.
pub fn ask_missing(prompts: &[Prompt], values: &mut Map<String, Value>) -> Result<()> {
    for prompt in prompts {
        if values.contains_key(prompt.name) {
            tracing::debug!(prompt = prompt.name, "answer provided, not asking");
            continue;
        }
        let answer = ask(prompt).with_context(|| format!("Failed to read '{}'", prompt.name))?;
        values.insert(prompt.name.to_string(), answer);
    }
    Ok(())
}

fn ask(prompt: &Prompt) -> Result<Value> {
    let answer = match &prompt.kind {
        PromptKind::Input => {
            let mut input = Input::<String>::new().with_prompt(prompt.message);
            if let Some(default) = prompt.default.as_str() {
                input = input.default(default.to_string());
            }
            Value::String(input.interact_text()?)
        }
        PromptKind::List(choices) => {
            let index = Select::new()
                .with_prompt(prompt.message)
                .items(choices.as_slice())
                .default(prompt.default_index())
                .interact()?;
            Value::String(choices[index].to_string())
        }
        PromptKind::Confirm => Value::Bool(
            Confirm::new()
                .with_prompt(prompt.message)
                .default(prompt.default.as_bool().unwrap_or(false))
                .interact()?,
        ),
    };
    Ok(answer)
}
