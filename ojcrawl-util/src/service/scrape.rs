use scraper::{ElementRef, Selector};

pub trait Scrape {
    fn elem(&self) -> ElementRef;

    fn find_first(&self, selector: &Selector) -> Option<ElementRef> {
        self.elem().select(selector).next()
    }

    fn inner_text(&self) -> String {
        self.elem().text().fold(String::new(), |mut ret, s| {
            ret.push_str(s);
            ret
        })
    }

    /// Value of `attr` on the first element matching `selector`, or an empty string.
    fn first_attr(&self, selector: &Selector, attr: &str) -> String {
        self.find_first(selector)
            .and_then(|elem| elem.value().attr(attr))
            .unwrap_or("")
            .to_owned()
    }
}

impl Scrape for ElementRef<'_> {
    fn elem(&self) -> ElementRef {
        *self
    }
}
