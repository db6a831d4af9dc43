use leptos::*;

/// Round profile picture, falling back to the first letter of the name
#[component]
pub fn Avatar(
    #[prop(into)]
    name: String,
    #[prop(into)]
    url: Option<String>,
    #[prop(default = "w-10 h-10")]
    size: &'static str,
) -> impl IntoView {
    match url {
        Some(url) => view! {
            <img src=url alt=name class=format!("{} rounded-full object-cover", size) />
        }
        .into_view(),
        None => view! {
            <div class=format!(
                "{} rounded-full bg-primary-600 flex items-center justify-center font-semibold",
                size
            )>
                {initial(&name)}
            </div>
        }
        .into_view(),
    }
}

fn initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial() {
        assert_eq!(initial("linh"), "L");
        assert_eq!(initial("  Étienne"), "É");
        assert_eq!(initial(""), "?");
    }
}
