use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home-page">
            <h2>"Schedule Corrections"</h2>
            <p class="page-description">
                "Find and fix errors in teaching schedules."
            </p>

            <div class="card-grid">
                <div class="card">
                    <h3>"Corrections"</h3>
                    <p>"Browse, sort and filter correction rules by status"</p>
                    <a href="/corrections/" class="btn btn-primary">"Open Table"</a>
                </div>
                <div class="card">
                    <h3>"Upload Schedule"</h3>
                    <p>"Upload an Excel schedule in .xlsx format"</p>
                    <a href="/upload/" rel="external" class="btn btn-primary">"Upload"</a>
                </div>
                <div class="card">
                    <h3>"Export"</h3>
                    <p>"Download the corrected schedule with its styles kept"</p>
                    <a href="/export/schedule/" rel="external" class="btn btn-primary">"Export Schedule"</a>
                </div>
            </div>

            <div class="how-it-works">
                <h3>"How It Works"</h3>
                <div class="steps">
                    <div class="step">
                        <span class="step-number">"1"</span>
                        <div class="step-content">
                            <strong>"Upload"</strong>
                            <p>"Load a schedule spreadsheet (.xlsx only)"</p>
                        </div>
                    </div>
                    <div class="step">
                        <span class="step-number">"2"</span>
                        <div class="step-content">
                            <strong>"Review"</strong>
                            <p>"Approve or reject suggested fixes in the corrections table"</p>
                        </div>
                    </div>
                    <div class="step">
                        <span class="step-number">"3"</span>
                        <div class="step-content">
                            <strong>"Export"</strong>
                            <p>"Download the schedule with approved corrections applied"</p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
