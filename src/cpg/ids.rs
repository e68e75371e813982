//! Typed arena node IDs: replaces reference-owns-declaration
//! back-pointers with index handles. A reference holds an
//! `Option<DeclId>`, never a pointer to the declaration itself.

use std::fmt;

macro_rules! node_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(u32);

        impl $name {
            pub fn from_index(index: usize) -> Self {
                Self(index as u32)
            }

            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

node_id!(DeclId);
node_id!(StmtId);
node_id!(ExprId);
