// src/resumes/tests/mod.rs
