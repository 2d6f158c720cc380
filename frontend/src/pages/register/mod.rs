use leptos::{ev::SubmitEvent, *};

use crate::components::{
    common::Button,
    forms::{FormContainer, InputField, SelectField},
    toast::ToastHost,
};
use crate::state::role::Role;

pub mod repository;
pub mod utils;
pub mod view_model;

use view_model::use_register_view_model;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let vm = use_register_view_model();
    let pending = vm.register_action.pending();
    let form = vm.form;
    let role_value = Signal::derive(move || form.role.get().as_str().to_string());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="flex items-center justify-center min-h-screen bg-gradient-to-r from-purple-500 to-indigo-600">
            <ToastHost/>
            <FormContainer title="Register">
                <form on:submit=on_submit>
                    <InputField
                        label="Name"
                        name="name"
                        placeholder="Enter your name"
                        value=form.name
                        on_input=Callback::new(move |v| form.name.set(v))
                    />
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
                    <SelectField
                        label="Role"
                        name="role"
                        options=utils::role_options()
                        value=role_value
                        on_change=Callback::new(move |v: String| form.role.set(Role::parse(&v)))
                    />
                    <Button class="w-full mt-2" loading=pending>
                        "Register"
                    </Button>
                </form>
                <p class="text-center mt-4 text-sm">
                    "Already have an account? "
                    <a href="/login" class="text-blue-600 hover:underline">"Login"</a>
                </p>
            </FormContainer>
        </div>
    }
}
