//! TypeScript bindings for the network monitor core are generated by `build.rs`
//! into `generated/typescript`.
