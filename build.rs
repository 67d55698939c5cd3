fn main() {
    println!("cargo::rerun-if-changed=schemas/books.graphql");

    cynic_codegen::register_schema("books")
        .from_sdl_file("schemas/books.graphql")
        .unwrap()
        .as_default()
        .unwrap();
}
