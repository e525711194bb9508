#[cfg(feature = "csr")]
fn main() {
    portfolio_dash::mount();
}

#[cfg(not(feature = "csr"))]
pub fn main() {
    // no native entry point, the dashboard only runs in the browser
    // build with `trunk serve` (see index.html), which enables the csr feature
}
