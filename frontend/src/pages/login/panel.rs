use super::view_model::use_login_view_model;
use crate::components::{
    common::Button,
    forms::{FormContainer, InputField},
    toast::ToastHost,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();
    let form = vm.form;

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="flex items-center justify-center min-h-screen bg-gradient-to-r from-purple-500 to-indigo-600">
            <ToastHost/>
            <FormContainer title="Login">
                <form on:submit=on_submit>
                    <InputField
                        label="Email"
                        name="email"
                        input_type="email"
                        placeholder="Enter your email"
                        value=form.email
                        on_input=Callback::new(move |v| form.email.set(v))
                    />
                    <InputField
                        label="Password"
                        name="password"
                        input_type="password"
                        placeholder="Enter your password"
                        value=form.password
                        on_input=Callback::new(move |v| form.password.set(v))
                    />
                    <Button class="w-full mt-2" loading=pending>
                        "Login"
                    </Button>
                </form>
                <p class="text-center mt-4 text-sm">
                    "Don't have an account? "
                    <a href="/register" class="text-blue-600 hover:underline">"Register"</a>
                </p>
            </FormContainer>
        </div>
    }
}
