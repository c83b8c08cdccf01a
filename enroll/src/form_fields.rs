/// Create an enum of labeled form fields that can be rotated through with
/// tab/shift-tab.
#[macro_export]
macro_rules! form_fields {
    ($name:ident { $($variant:ident => $label:literal),* $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $(
                #[doc = $label]
                $variant
            ),*
        }

        impl $name {
            /// Every field, in display order.
            pub const FIELDS: &'static [$name] = &[
                $($name::$variant),*
            ];

            /// Position in display order.
            fn index(self) -> usize {
                match self {
                    $(Self::$variant => $name::$variant as usize),*
                }
            }

            /// The label shown next to the control.
            pub fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),*
                }
            }

            /// A stable identifier for the control, derived from its
            /// label.
            pub fn control_id(self) -> String {
                $crate::form_fields::control_id(self.label())
            }

            /// Rotate through the options (e.g. with tab)
            pub fn next(self) -> Self {
                Self::FIELDS[(self.index() + 1) % Self::FIELDS.len()]
            }

            /// Rotate through the options in reverse (e.g. with shift-tab)
            pub fn prev(self) -> Self {
                Self::FIELDS[(self.index() + Self::FIELDS.len() - 1) % Self::FIELDS.len()]
            }
        }
    };
}

/// Derive a stable control identifier from a label: lowercased, runs of
/// whitespace collapsed to single dashes.
pub fn control_id(label: &str) -> String {
    let lowered = label.to_lowercase();

    lowered.split_whitespace().collect::<Vec<_>>().join("-")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lowercases() {
        assert_eq!(control_id("EMAIL ID"), "email-id");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(control_id("Confirm \t Password"), "confirm-password");
    }

    #[test]
    fn single_words_pass_through() {
        assert_eq!(control_id("City"), "city");
    }
}
