use crate::normalize::strip_html;
use log::debug;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;

/// Scraped steps must be longer than this (in characters) to count.
const MIN_STEP_CHARS: usize = 15;

const STEP_CONTENT_CLASSES: [&str; 3] = ["stepcontent", "step_content", "instruction_content"];

const STEP_CONTAINER_CLASSES: [&str; 6] = [
    "preparation_step",
    "instruction",
    "step_content",
    "recipe-steps",
    "recipe_steps",
    "steps_list",
];

const STEP_TEXT_CLASSES: [&str; 4] = [
    "step_text",
    "step_content",
    "instruction_text",
    "preparation_step",
];

static ITEMPROP_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("[itemprop]").unwrap());
static CLASSED_DIV_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div[class]").unwrap());
static CLASSED_CONTAINER_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("ol[class], ul[class], div[class], section[class]").unwrap()
});
static CLASSED_ITEM_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("li[class], p[class]").unwrap());
static ITEM_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("li, p").unwrap());
static LIST_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("ol, ul").unwrap());

type Strategy = fn(&Html) -> Vec<String>;

/// Scrapes direction steps straight from page markup.
///
/// Strategies run in order and the first one that yields anything wins; the
/// result is in document order and may be empty.
pub fn scrape_directions(html: &str) -> Vec<String> {
    scrape_document(&Html::parse_document(html))
}

pub(super) fn scrape_document(document: &Html) -> Vec<String> {
    let strategies: [(&str, Strategy); 4] = [
        ("itemprop microdata", itemprop_steps),
        ("step content divs", step_content_divs),
        ("class-based containers", class_container_steps),
        ("individual step elements", classed_step_elements),
    ];

    for (name, strategy) in strategies {
        let steps = strategy(document);
        if !steps.is_empty() {
            debug!("DirectionsScraper: {} matched {} steps", name, steps.len());
            return steps;
        }
        debug!("DirectionsScraper: {} found nothing", name);
    }

    Vec::new()
}

fn itemprop_steps(document: &Html) -> Vec<String> {
    let containers = document
        .select(&ITEMPROP_SELECTOR)
        .filter(|el| {
            el.value().attr("itemprop").is_some_and(|props| {
                props
                    .split_whitespace()
                    .any(|p| p.eq_ignore_ascii_case("recipeInstructions"))
            })
        })
        .collect();

    // Microdata often tags each <li> itself, in which case the container is the step.
    collect_items(&outermost(containers), true)
}

fn step_content_divs(document: &Html) -> Vec<String> {
    let divs = document
        .select(&CLASSED_DIV_SELECTOR)
        .filter(|el| has_class_token(el, &STEP_CONTENT_CLASSES))
        .collect();

    innermost(divs).iter().filter_map(step_text).collect()
}

fn class_container_steps(document: &Html) -> Vec<String> {
    let containers = document
        .select(&CLASSED_CONTAINER_SELECTOR)
        .filter(|el| has_class_token(el, &STEP_CONTAINER_CLASSES))
        .collect();

    collect_items(&outermost(containers), false)
}

fn classed_step_elements(document: &Html) -> Vec<String> {
    let items = document
        .select(&CLASSED_ITEM_SELECTOR)
        .filter(|el| has_class_token(el, &STEP_TEXT_CLASSES))
        .collect();

    innermost(items).iter().filter_map(step_text).collect()
}

/// Collects `<li>`/`<p>` steps inside each container. Items that wrap a nested
/// list are group headers and are skipped; the nested items are picked up on
/// their own.
fn collect_items(containers: &[ElementRef], container_is_item: bool) -> Vec<String> {
    let mut steps = Vec::new();

    for container in containers {
        let items: Vec<ElementRef> = container
            .select(&ITEM_SELECTOR)
            .filter(|item| item.select(&LIST_SELECTOR).next().is_none())
            .collect();

        if items.is_empty() {
            if container_is_item && container.select(&LIST_SELECTOR).next().is_none() {
                steps.extend(step_text(container));
            }
            continue;
        }

        steps.extend(innermost(items).iter().filter_map(step_text));
    }

    steps
}

fn step_text(element: &ElementRef) -> Option<String> {
    let text = strip_html(&element.inner_html());
    (text.chars().count() > MIN_STEP_CHARS).then_some(text)
}

fn has_class_token(element: &ElementRef, tokens: &[&str]) -> bool {
    element.value().attr("class").is_some_and(|class| {
        let class = class.to_ascii_lowercase();
        tokens.iter().any(|token| class.contains(token))
    })
}

/// Drops elements nested inside another element of the same set.
fn outermost(elements: Vec<ElementRef>) -> Vec<ElementRef> {
    let ids: HashSet<_> = elements.iter().map(|el| el.id()).collect();
    elements
        .into_iter()
        .filter(|el| !el.ancestors().any(|ancestor| ids.contains(&ancestor.id())))
        .collect()
}

/// Drops elements that contain another element of the same set.
fn innermost(elements: Vec<ElementRef>) -> Vec<ElementRef> {
    let ids: HashSet<_> = elements.iter().map(|el| el.id()).collect();
    elements
        .into_iter()
        .filter(|el| {
            !el.descendants()
                .skip(1)
                .any(|descendant| ids.contains(&descendant.id()))
        })
        .collect()
}
