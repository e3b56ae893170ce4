use anyhow::anyhow;
use cargas_domain::{StatusCategory, StatusDescriptor};

use crate::context::AppContext;

pub fn statuses(
    ctx: &AppContext,
    category: Option<&str>,
    search: Option<&str>,
) -> anyhow::Result<()> {
    let vocabulary = ctx.vocabulary()?;

    let entries: Vec<StatusDescriptor> = match (category, search) {
        (Some(label), _) => {
            let category: StatusCategory = label.parse().map_err(|err: String| {
                let known: Vec<&str> =
                    vocabulary.categories().iter().map(StatusCategory::as_str).collect();
                anyhow!("{err} (known: {})", known.join(", "))
            })?;
            vocabulary.by_category(category)
        }
        (None, Some(term)) => vocabulary.search(term),
        (None, None) => vocabulary.entries(),
    };

    println!("{} statuses ({})", ctx.current().display_name, entries.len());
    for entry in entries {
        println!("{:>6}  {:<45} {}", entry.code.as_key(), entry.label, entry.category.as_str());
    }
    Ok(())
}
