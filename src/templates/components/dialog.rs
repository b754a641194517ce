use crate::dates;
use crate::domain::Listing;
use crate::forms::schema::Rule;
use crate::forms::{
    Feedback, FieldKind, FieldSpec, Flow, FormDraft, FormSession, SubmissionHandler,
};
use chrono::NaiveDate;
use maud::{html, Markup};

/// What the dialog template needs from an open `FormSession`.
pub struct DialogVm<'a> {
    pub flow: &'static Flow,
    pub listing: &'a Listing,
    pub draft: &'a FormDraft,
    pub feedback: &'a Feedback,
    pub today: NaiveDate,
}

impl<'a> DialogVm<'a> {
    /// `None` when the session's dialog is closed.
    pub fn from_session<H: SubmissionHandler>(
        session: &'a FormSession<H>,
        today: NaiveDate,
    ) -> Option<Self> {
        let listing = session.dialog().target()?;
        Some(Self {
            flow: session.flow(),
            listing,
            draft: session.form().draft(),
            feedback: session.feedback(),
            today,
        })
    }

    fn error(&self, field: &str) -> Option<&'static str> {
        match self.feedback {
            Feedback::Invalid(result) => result.error(field),
            _ => None,
        }
    }

    /// Earliest selectable day for a date field.
    fn min_date(&self, spec: &FieldSpec) -> NaiveDate {
        match spec.rule {
            Rule::Date {
                after: Some((other, _)),
            } => self
                .draft
                .date(other)
                .map(dates::earliest_check_out)
                .map_or(self.today, |d| d.max(self.today)),
            _ => self.today,
        }
    }
}

fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Email => "email",
        FieldKind::Tel => "tel",
        FieldKind::Number => "number",
        FieldKind::Date => "date",
        _ => "text",
    }
}

fn field(vm: &DialogVm, spec: &FieldSpec) -> Markup {
    let error = vm.error(spec.name);
    let id = format!("{}-{}", vm.flow.market.slug(), spec.name);
    let class = if error.is_some() { "field invalid" } else { "field" };

    html! {
        div class=(class) {
            @match spec.kind {
                FieldKind::Choice(choices) => {
                    span { (spec.label) }
                    @for choice in choices {
                        label class="choice" {
                            input
                                type="radio"
                                name=(spec.name)
                                value=(choice.tag)
                                checked[vm.draft.choice(spec.name) == Some(choice.tag)];
                            (choice.label)
                        }
                    }
                }
                FieldKind::LongText => {
                    label for=(id) { (spec.label) }
                    textarea id=(id) name=(spec.name) placeholder=(spec.placeholder) {
                        (vm.draft.text(spec.name))
                    }
                }
                FieldKind::Date => {
                    label for=(id) { (spec.label) }
                    input
                        type="date"
                        id=(id)
                        name=(spec.name)
                        min=(dates::to_input(vm.min_date(spec)))
                        value=[vm.draft.date(spec.name).map(dates::to_input)];
                    @if let Some(date) = vm.draft.date(spec.name) {
                        span class="hint" { (dates::display(date)) }
                    } @else {
                        span class="hint" { (spec.placeholder) }
                    }
                }
                kind => {
                    label for=(id) { (spec.label) }
                    input
                        type=(input_type(kind))
                        id=(id)
                        name=(spec.name)
                        placeholder=(spec.placeholder)
                        value=(vm.draft.text(spec.name));
                }
            }
            @if let Some(hint) = spec.hint {
                p class="hint" { (hint) }
            }
            @if let Some(message) = error {
                p class="error" role="alert" { (message) }
            }
        }
    }
}

pub fn dialog(vm: &DialogVm) -> Markup {
    let slug = vm.flow.market.slug();
    let submit = format!("/{slug}/submit");
    let cancel = format!("/{slug}/cancel");

    html! {
        div class="overlay" {
            div class="dialog" role="dialog" aria-modal="true" aria-labelledby="dialog-title" {
                h2 id="dialog-title" { (vm.flow.title(Some(vm.listing))) }
                p class="blurb" { (vm.flow.blurb) }

                @if let Feedback::Failed(err) = vm.feedback {
                    div class="banner" role="alert" {
                        (err.to_string()) " Your details are still here, please try again."
                    }
                }

                form
                    method="post"
                    action=(submit)
                    hx-post=(submit)
                    hx-target="#dialog-root"
                    hx-swap="outerHTML"
                    hx-disabled-elt="button"
                    novalidate
                {
                    @for spec in vm.flow.schema.fields {
                        (field(vm, spec))
                    }

                    div class="dialog-footer" {
                        button
                            type="submit"
                            class="btn outline"
                            formaction=(cancel)
                            hx-post=(cancel)
                            hx-target="#dialog-root"
                            hx-swap="outerHTML"
                        { "Cancel" }
                        button type="submit" class="btn" { (vm.flow.submit_label) }
                    }
                }
            }
        }
    }
}

/// Swap target for dialog updates. Empty when no dialog is open.
pub fn dialog_root(vm: Option<&DialogVm>) -> Markup {
    html! {
        div id="dialog-root" {
            @if let Some(vm) = vm {
                (dialog(vm))
            }
        }
    }
}
