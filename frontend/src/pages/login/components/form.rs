use crate::{components::error::InlineErrorMessage, pages::login::view_model::LoginViewModel};
use leptos::*;
use web_sys::HtmlInputElement;

const INPUT: &str = "appearance-none relative block w-full px-3 py-2 border border-form-control-border placeholder-fg-muted text-fg bg-form-control-bg focus:outline-none focus:ring-action-primary-focus focus:border-action-primary-focus focus:z-10 sm:text-sm";

#[component]
pub fn LoginForm(vm: LoginViewModel) -> impl IntoView {
    let pending = vm.login_action.pending();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"ArrivApp"</h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">"Panel de control de asistencia"</p>
                </div>
                <form class="mt-8 space-y-6" on:submit=on_submit>
                    <div class="rounded-md shadow-sm -space-y-px">
                        <div>
                            <label for="username" class="sr-only">"Usuario"</label>
                            <input
                                id="username"
                                name="username"
                                type="text"
                                autocomplete="username"
                                class=format!("{} rounded-t-md", INPUT)
                                placeholder="Usuario"
                                prop:value=vm.form.username
                                on:input=move |ev| {
                                    vm.form.username.set(event_target::<HtmlInputElement>(&ev).value())
                                }
                            />
                        </div>
                        <div>
                            <label for="password" class="sr-only">"Contraseña"</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                autocomplete="current-password"
                                class=format!("{} rounded-b-md", INPUT)
                                placeholder="Contraseña"
                                prop:value=vm.form.password
                                on:input=move |ev| {
                                    vm.form.password.set(event_target::<HtmlInputElement>(&ev).value())
                                }
                            />
                        </div>
                    </div>

                    <InlineErrorMessage error=vm.error.into() />

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
