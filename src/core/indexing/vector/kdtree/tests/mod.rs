// src/core/indexing/vector/kdtree/tests/mod.rs

mod test_select;
