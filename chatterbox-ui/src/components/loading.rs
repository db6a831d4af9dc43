use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerSize {
    /// Inside buttons and next to text
    Inline,
    /// Alone in a section
    Block,
}

impl SpinnerSize {
    fn class(self) -> &'static str {
        match self {
            SpinnerSize::Inline => "inline-block loading-spinner w-4 h-4",
            SpinnerSize::Block => "loading-spinner w-8 h-8",
        }
    }
}

/// Spinner with an optional caption
#[component]
pub fn Spinner(
    #[prop(default = SpinnerSize::Inline)]
    size: SpinnerSize,
    #[prop(optional)]
    label: Option<&'static str>,
) -> impl IntoView {
    let spinner = view! { <span aria-hidden="true" class=size.class() /> };
    match size {
        SpinnerSize::Inline => view! {
            {spinner}
            {label.map(|text| view! { <span>{text}</span> })}
        }
        .into_view(),
        SpinnerSize::Block => view! {
            <div role="status" class="flex flex-col items-center justify-center py-12 space-y-2">
                {spinner}
                {label.map(|text| view! { <span class="text-sm text-gray-400">{text}</span> })}
            </div>
        }
        .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_class() {
        assert!(SpinnerSize::Inline.class().contains("w-4"));
        assert!(SpinnerSize::Block.class().contains("w-8"));
    }
}
