// build.rs
fn main() {
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/carplot.ico");    // single PNG entry (Vista+)
        res.compile().unwrap();
    }
}
