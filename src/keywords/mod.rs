// Keyword routing: the first, deterministic classification stage.
//
// The category table is compiled in; the matcher walks it in declaration
// order and stops at the first keyword found anywhere in the query.

pub mod matcher;
pub mod table;
