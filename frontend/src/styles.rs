pub const PAGE: &str = "min-h-screen bg-gray-900 text-white flex flex-col items-center justify-center p-4 overflow-hidden";
pub const HEADER: &str = "text-center mb-6 md:mb-8";
pub const HEADER_TITLE: &str = "text-4xl md:text-5xl lg:text-6xl font-bold tracking-tight text-transparent bg-clip-text bg-gradient-to-r from-purple-400 to-indigo-600";
pub const HEADER_SUBTITLE: &str = "mt-3 text-lg text-gray-400 max-w-2xl mx-auto";
pub const LAYOUT: &str = "w-full flex flex-col lg:flex-row items-center justify-center lg:justify-around gap-12 lg:gap-16";

pub const SELECTOR_CARD: &str = "w-full md:w-64 lg:w-72 bg-gray-800 p-6 rounded-2xl shadow-lg border border-gray-700";
pub const SELECTOR_TITLE: &str = "text-2xl font-bold mb-4 text-center text-indigo-400";
pub const SELECTOR_HINT: &str = "text-sm text-gray-400 mb-6 text-center";
pub const SELECTOR_LIST: &str = "space-y-3";
pub const SELECTOR_BUTTON_BASE: &str = "w-full text-lg font-semibold py-3 px-4 rounded-lg transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-gray-800";
pub const SELECTOR_RANDOM_ACTIVE: &str = "bg-indigo-600 text-white shadow-md";
pub const SELECTOR_RANDOM_IDLE: &str = "bg-gray-700 text-gray-300 hover:bg-gray-600";

pub const SPIN_BUTTON: &str = "absolute w-24 h-24 sm:w-32 sm:h-32 md:w-40 md:h-40 bg-gray-800 rounded-full border-4 border-gray-600 shadow-lg flex items-center justify-center text-2xl sm:text-3xl font-bold text-white transform transition-transform hover:scale-105 active:scale-95 focus:outline-none focus:ring-4 focus:ring-indigo-500 disabled:opacity-60 disabled:cursor-not-allowed disabled:scale-100";

pub const RESULT_CARD: &str = "mt-4 p-4 rounded-xl text-center transition-all duration-300 animate-fade-in-up";
