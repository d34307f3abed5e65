// src/main.rs — Scan Console (Rust + Yew + WASM)
// Front-end for the hash / IP scan service:
// - live format check (IPv4, MD5, SHA-1, SHA-256) while typing
// - empty-submit gate + loading state, then a plain form POST to the server
// - copy buttons for example inputs, verdict legend, Ctrl/Cmd+Enter submit

mod classify;
mod clipboard;
mod config;
mod controller;
mod copy_button;
mod diag;
mod error;
mod scan_form;
mod scroll;
mod shortcuts;
mod threat;
mod tooltip;

use std::rc::Rc;

use web_sys::window;
use yew::prelude::*;

use config::ScannerConfig;
use copy_button::CopyButton;
use scan_form::ScanForm;
use scroll::AnchorLink;
use threat::VerdictLegend;
use tooltip::Tooltips;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<ScannerConfig>,
    tooltips: Tooltips,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let form_ref = use_node_ref();
    let config = props.config.clone();

    // Document-level listeners + tooltips, once per mount.
    {
        let form_ref = form_ref.clone();
        let tooltips = props.tooltips.clone();
        use_effect_with((), move |_| {
            let listeners = window().and_then(|w| w.document()).map(|doc| {
                [
                    shortcuts::submit_on_chord(&doc, form_ref),
                    shortcuts::log_visibility(&doc),
                ]
            });

            let attached = tooltips.activate_all();
            if attached > 0 {
                diag::info(&format!("{} tooltips attached: {attached}", tooltips.name()));
            }

            move || drop(listeners)
        });
    }

    html! {
        <>
          <a id="top"></a>

          <div class="wrap">
            <header class="hero">
              <div class="badge-top">{ "Threat intelligence lookup" }</div>
              <h1 class="h1">{ "Scan Console" }</h1>
              <p class="sub">{ "Check a file hash or an IP address against VirusTotal and AbuseIPDB." }</p>

              <nav class="nav" aria-label="Quick navigation">
                <AnchorLink class={classes!("chip")} href="#scan">{ "Scan" }</AnchorLink>
                <AnchorLink class={classes!("chip")} href="#examples">{ "Examples" }</AnchorLink>
                <AnchorLink class={classes!("chip")} href="#verdicts">{ "Verdicts" }</AnchorLink>
              </nav>
            </header>

            <section id="scan" class="card">
              <div class="card-h">
                <h2 class="card-t">{ "New scan" }</h2>
                <p class="card-p">{ "Hashes are looked up on VirusTotal, IPv4 addresses on AbuseIPDB." }</p>
              </div>
              <div class="card-b">
                <ScanForm
                    action={AttrValue::from(config.action.clone())}
                    method={AttrValue::from(config.method.clone())}
                    form_ref={form_ref.clone()}
                />
              </div>
            </section>

            <section id="examples" class="card">
              <div class="card-h">
                <h2 class="card-t">{ "Examples" }</h2>
                <p class="card-p">{ "Copy one into the form to see what a result looks like." }</p>
              </div>
              <div class="card-b">
                <div class="kv">
                  { for config.samples.iter().map(|s| html! {
                    <div class="k" key={s.value.clone()}>
                      <div class="label">{ s.label.clone() }</div>
                      <div class="value">
                        <code>{ s.value.clone() }</code>
                        <CopyButton
                            text={AttrValue::from(s.value.clone())}
                            revert_ms={config.copy_revert_ms}
                        />
                      </div>
                    </div>
                  }) }
                </div>
              </div>
            </section>

            <section id="verdicts" class="card">
              <div class="card-h">
                <h2 class="card-t">{ "Verdicts" }</h2>
                <p class="card-p">{ "How results are graded on the report page." }</p>
              </div>
              <div class="card-b">
                <VerdictLegend />
              </div>
            </section>
          </div>

          <AnchorLink class={classes!("backtop")} href="#top">{ "↑ Top" }</AnchorLink>
        </>
    }
}

fn main() {
    let config = ScannerConfig::load();
    let tooltips = Tooltips::for_mode(config.tooltips);
    diag::info(&format!(
        "scan console starting (action={} method={} tooltips={})",
        config.action,
        config.method,
        tooltips.name()
    ));

    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
        tooltips,
    })
    .render();
}
