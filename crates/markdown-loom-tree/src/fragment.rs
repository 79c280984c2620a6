use std::fmt::Display;

use crate::NodeId;

/// Anything that can be passed to [`Tree::add`](crate::Tree::add).
///
/// Nodes are linked as elements, strings become text and sequences are
/// added item by item. Other values go through their `Display` output via
/// [`Fragment::display`] or one of the primitive conversions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Element(NodeId),
    Text(String),
    Sequence(Vec<Fragment>),
}

impl Fragment {
    pub fn display(value: impl Display) -> Self {
        Fragment::Text(value.to_string())
    }

    pub fn empty() -> Self {
        Fragment::Sequence(Vec::new())
    }
}

impl From<NodeId> for Fragment {
    fn from(id: NodeId) -> Self {
        Fragment::Element(id)
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Fragment::Text(text.to_string())
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Fragment::Text(text)
    }
}

impl From<&String> for Fragment {
    fn from(text: &String) -> Self {
        Fragment::Text(text.clone())
    }
}

impl From<()> for Fragment {
    fn from(_: ()) -> Self {
        Fragment::empty()
    }
}

impl<T: Into<Fragment>> From<Option<T>> for Fragment {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Fragment::empty, Into::into)
    }
}

impl<T: Into<Fragment>> From<Vec<T>> for Fragment {
    fn from(items: Vec<T>) -> Self {
        Fragment::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Fragment>, const N: usize> From<[T; N]> for Fragment {
    fn from(items: [T; N]) -> Self {
        Fragment::Sequence(items.into_iter().map(Into::into).collect())
    }
}

macro_rules! fragment_from_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Fragment {
                fn from(value: $ty) -> Self {
                    Fragment::display(value)
                }
            }
        )+
    };
}

fragment_from_display!(char, bool, i32, i64, u32, u64, usize, f64);

macro_rules! fragment_from_tuple {
    ($($name:ident),+) => {
        impl<$($name: Into<Fragment>),+> From<($($name,)+)> for Fragment {
            #[allow(non_snake_case)]
            fn from(($($name,)+): ($($name,)+)) -> Self {
                Fragment::Sequence(vec![$($name.into()),+])
            }
        }
    };
}

fragment_from_tuple!(A, B);
fragment_from_tuple!(A, B, C);
fragment_from_tuple!(A, B, C, D);
fragment_from_tuple!(A, B, C, D, E);
fragment_from_tuple!(A, B, C, D, E, F);
fragment_from_tuple!(A, B, C, D, E, F, G);
fragment_from_tuple!(A, B, C, D, E, F, G, H);
