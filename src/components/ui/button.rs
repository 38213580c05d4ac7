use leptos::prelude::*;
use leptos_ui::variants;

variants! {
    Button {
        base: "inline-flex items-center justify-center gap-2 whitespace-nowrap text-sm font-medium transition-colors disabled:pointer-events-none disabled:opacity-50 [&_svg]:pointer-events-none [&_svg]:shrink-0 outline-none focus-visible:ring-2 focus-visible:ring-blue-500 hover:cursor-pointer select-none",
        variants: {
            variant: {
                Default: "bg-blue-500 text-white rounded hover:bg-blue-600",
                Active: "bg-blue-100 text-blue-600 rounded-full hover:bg-blue-200",
                Muted: "text-gray-500 rounded-full hover:bg-gray-200",
                Danger: "text-red-500 rounded-full hover:bg-gray-200",
                Success: "text-green-500 rounded-full hover:bg-gray-200",
            },
            size: {
                Default: "h-9 px-4 py-2",
                Sm: "px-4 py-1",
                Icon: "p-2 [&_svg:not([class*='size-'])]:size-4",
                IconLg: "p-2 [&_svg:not([class*='size-'])]:size-6",
            }
        },
        component: {
            element: button
        }
    }
}
