use std::fmt;

/// The `type` of an `<input>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputType {
    #[default]
    Text,
    Email,
    Tel,
    Url,
    Number,
    Password,
    Search,
    Date,
    Hidden,
    Radio,
    Checkbox,
    Submit,
    Reset,
    Button,
}

impl InputType {
    /// Parse an HTML `type` attribute. Unknown types behave like `text`, as in browsers.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "email" => Self::Email,
            "tel" => Self::Tel,
            "url" => Self::Url,
            "number" => Self::Number,
            "password" => Self::Password,
            "search" => Self::Search,
            "date" => Self::Date,
            "hidden" => Self::Hidden,
            "radio" => Self::Radio,
            "checkbox" => Self::Checkbox,
            "submit" => Self::Submit,
            "reset" => Self::Reset,
            "button" => Self::Button,
            _ => Self::Text,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Number => "number",
            Self::Password => "password",
            Self::Search => "search",
            Self::Date => "date",
            Self::Hidden => "hidden",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::Submit => "submit",
            Self::Reset => "reset",
            Self::Button => "button",
        }
    }

    /// Radio and checkbox inputs carry a checked state instead of a typed value.
    pub fn is_checkable(&self) -> bool {
        matches!(self, Self::Radio | Self::Checkbox)
    }
}

/// The `type` of a `<button>` element. Buttons default to `submit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonType {
    #[default]
    Submit,
    Reset,
    Button,
}

impl ButtonType {
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "reset" => Self::Reset,
            "button" => Self::Button,
            _ => Self::Submit,
        }
    }
}

/// Element tag. Only the tags a form tree needs are modelled; anything else is `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    Form,
    Div,
    Label,
    Span,
    Input(InputType),
    Select,
    Option,
    Textarea,
    Button(ButtonType),
    Other(String),
}

impl Tag {
    /// Build a tag from its name and, for inputs and buttons, the `type` attribute.
    pub fn parse(name: &str, type_attr: Option<&str>) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "form" => Self::Form,
            "div" => Self::Div,
            "label" => Self::Label,
            "span" => Self::Span,
            "input" => Self::Input(type_attr.map(InputType::parse).unwrap_or_default()),
            "select" => Self::Select,
            "option" => Self::Option,
            "textarea" => Self::Textarea,
            "button" => Self::Button(type_attr.map(ButtonType::parse).unwrap_or_default()),
            other => Self::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Form => "form",
            Self::Div => "div",
            Self::Label => "label",
            Self::Span => "span",
            Self::Input(_) => "input",
            Self::Select => "select",
            Self::Option => "option",
            Self::Textarea => "textarea",
            Self::Button(_) => "button",
            Self::Other(name) => name,
        }
    }

    /// Listed form controls, i.e. what `form.elements` returns in a browser.
    pub fn is_control(&self) -> bool {
        matches!(
            self,
            Self::Input(_) | Self::Select | Self::Textarea | Self::Button(_)
        )
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(ty) => write!(f, "input[type={}]", ty.as_str()),
            other => f.write_str(other.name()),
        }
    }
}
