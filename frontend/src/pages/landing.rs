use leptos::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-screen bg-gradient-to-r from-purple-500 to-indigo-600 text-white">
            <h1 class="text-4xl font-bold mb-6">"Welcome to WFH Attendance"</h1>
            <p class="text-lg mb-8">"Effortlessly manage attendance for remote teams."</p>
            <div class="flex gap-4">
                <a href="/login" class="px-6 py-3 bg-white text-indigo-600 font-semibold rounded-lg shadow-md hover:bg-gray-200 transition">
                    "Login"
                </a>
                <a href="/register" class="px-6 py-3 border border-white font-semibold rounded-lg hover:bg-white hover:text-indigo-600 transition">
                    "Register"
                </a>
            </div>
        </div>
    }
}
