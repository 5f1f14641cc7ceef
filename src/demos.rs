//! Usage demos for components
//!
//! A handful of components carry hand-written demos. Every other name gets a
//! generated placeholder so `get_component_demo` always has something to
//! return.

use serde::Serialize;

/// One usage example of a component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Demo {
    pub name: String,
    pub description: String,
    pub imports: Vec<String>,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

struct DemoSource {
    name: &'static str,
    description: &'static str,
    imports: &'static [&'static str],
    code: &'static str,
    preview: Option<&'static str>,
}

impl DemoSource {
    fn to_demo(&self) -> Demo {
        Demo {
            name: self.name.to_string(),
            description: self.description.to_string(),
            imports: self.imports.iter().map(|s| s.to_string()).collect(),
            code: self.code.to_string(),
            preview: self.preview.map(str::to_string),
        }
    }
}

const BUTTON_IMPORT: &str = r#"import { Button } from "@/components/ui/button""#;
const INPUT_IMPORT: &str = r#"import { Input } from "@/components/ui/input""#;
const LABEL_IMPORT: &str = r#"import { Label } from "@/components/ui/label""#;

static BUTTON: &[DemoSource] = &[
    DemoSource {
        name: "Basic Button",
        description: "A simple button with different variants",
        preview: None,
        imports: &[BUTTON_IMPORT],
        code: r#"<div className="flex gap-4">
  <Button>Default</Button>
  <Button variant="secondary">Secondary</Button>
  <Button variant="destructive">Destructive</Button>
  <Button variant="outline">Outline</Button>
  <Button variant="ghost">Ghost</Button>
  <Button variant="link">Link</Button>
</div>"#,
    },
    DemoSource {
        name: "Button with Icon",
        description: "Button with an icon from lucide-react",
        preview: None,
        imports: &[BUTTON_IMPORT, r#"import { Mail } from "lucide-react""#],
        code: r#"<Button>
  <Mail className="mr-2 h-4 w-4" /> Login with Email
</Button>"#,
    },
    DemoSource {
        name: "Loading Button",
        description: "Button with loading state",
        preview: None,
        imports: &[BUTTON_IMPORT, r#"import { Loader2 } from "lucide-react""#],
        code: r#"<Button disabled>
  <Loader2 className="mr-2 h-4 w-4 animate-spin" />
  Please wait
</Button>"#,
    },
];

static CARD: &[DemoSource] = &[
    DemoSource {
        name: "Basic Card",
        description: "A simple card with header, content, and footer",
        preview: None,
        imports: &[
            r#"import { Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle } from "@/components/ui/card""#,
            BUTTON_IMPORT,
        ],
        code: r#"<Card className="w-[350px]">
  <CardHeader>
    <CardTitle>Create project</CardTitle>
    <CardDescription>Deploy your new project in one-click.</CardDescription>
  </CardHeader>
  <CardContent>
    <p>Add your project details here.</p>
  </CardContent>
  <CardFooter className="flex justify-between">
    <Button variant="outline">Cancel</Button>
    <Button>Deploy</Button>
  </CardFooter>
</Card>"#,
    },
    DemoSource {
        name: "Card with Form",
        description: "Card containing a form",
        preview: None,
        imports: &[
            r#"import { Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle } from "@/components/ui/card""#,
            INPUT_IMPORT,
            LABEL_IMPORT,
            BUTTON_IMPORT,
        ],
        code: r#"<Card className="w-[350px]">
  <CardHeader>
    <CardTitle>Account</CardTitle>
    <CardDescription>
      Make changes to your account here. Click save when you're done.
    </CardDescription>
  </CardHeader>
  <CardContent className="space-y-2">
    <div className="space-y-1">
      <Label htmlFor="name">Name</Label>
      <Input id="name" defaultValue="Pedro Duarte" />
    </div>
    <div className="space-y-1">
      <Label htmlFor="username">Username</Label>
      <Input id="username" defaultValue="@peduarte" />
    </div>
  </CardContent>
  <CardFooter>
    <Button>Save changes</Button>
  </CardFooter>
</Card>"#,
    },
];

static INPUT: &[DemoSource] = &[
    DemoSource {
        name: "Basic Input",
        description: "Different input types",
        preview: None,
        imports: &[INPUT_IMPORT, LABEL_IMPORT],
        code: r#"<div className="grid w-full max-w-sm items-center gap-1.5">
  <Label htmlFor="email">Email</Label>
  <Input type="email" id="email" placeholder="Email" />
</div>"#,
    },
    DemoSource {
        name: "Input with Button",
        description: "Input field with an action button",
        preview: None,
        imports: &[INPUT_IMPORT, BUTTON_IMPORT],
        code: r#"<div className="flex w-full max-w-sm items-center space-x-2">
  <Input type="email" placeholder="Email" />
  <Button type="submit">Subscribe</Button>
</div>"#,
    },
    DemoSource {
        name: "Disabled Input",
        description: "Disabled input field",
        preview: None,
        imports: &[INPUT_IMPORT],
        code: r#"<Input disabled type="email" placeholder="Email" />"#,
    },
];

static DIALOG: &[DemoSource] = &[DemoSource {
    name: "Basic Dialog",
    description: "A modal dialog with trigger button",
    preview: None,
    imports: &[
        r#"import { Dialog, DialogContent, DialogDescription, DialogHeader, DialogTitle, DialogTrigger } from "@/components/ui/dialog""#,
        BUTTON_IMPORT,
    ],
    code: r#"<Dialog>
  <DialogTrigger asChild>
    <Button variant="outline">Edit Profile</Button>
  </DialogTrigger>
  <DialogContent className="sm:max-w-[425px]">
    <DialogHeader>
      <DialogTitle>Edit profile</DialogTitle>
      <DialogDescription>
        Make changes to your profile here. Click save when you're done.
      </DialogDescription>
    </DialogHeader>
    <div className="grid gap-4 py-4">
      <p>Profile form fields go here</p>
    </div>
  </DialogContent>
</Dialog>"#,
}];

static SELECT: &[DemoSource] = &[DemoSource {
    name: "Basic Select",
    description: "A dropdown select component",
    preview: None,
    imports: &[
        r#"import { Select, SelectContent, SelectItem, SelectTrigger, SelectValue } from "@/components/ui/select""#,
    ],
    code: r#"<Select>
  <SelectTrigger className="w-[180px]">
    <SelectValue placeholder="Select a fruit" />
  </SelectTrigger>
  <SelectContent>
    <SelectItem value="apple">Apple</SelectItem>
    <SelectItem value="banana">Banana</SelectItem>
    <SelectItem value="blueberry">Blueberry</SelectItem>
    <SelectItem value="grapes">Grapes</SelectItem>
    <SelectItem value="pineapple">Pineapple</SelectItem>
  </SelectContent>
</Select>"#,
}];

static FORM: &[DemoSource] = &[DemoSource {
    name: "Login Form",
    description: "Form with validation using react-hook-form and zod",
    preview: None,
    imports: &[
        r#"import { zodResolver } from "@hookform/resolvers/zod""#,
        r#"import { useForm } from "react-hook-form""#,
        r#"import * as z from "zod""#,
        BUTTON_IMPORT,
        r#"import { Form, FormControl, FormDescription, FormField, FormItem, FormLabel, FormMessage } from "@/components/ui/form""#,
        INPUT_IMPORT,
    ],
    code: r#"const formSchema = z.object({
  username: z.string().min(2, {
    message: "Username must be at least 2 characters.",
  }),
})

export function ProfileForm() {
  const form = useForm<z.infer<typeof formSchema>>({
    resolver: zodResolver(formSchema),
    defaultValues: {
      username: "",
    },
  })

  function onSubmit(values: z.infer<typeof formSchema>) {
    console.log(values)
  }

  return (
    <Form {...form}>
      <form onSubmit={form.handleSubmit(onSubmit)} className="space-y-8">
        <FormField
          control={form.control}
          name="username"
          render={({ field }) => (
            <FormItem>
              <FormLabel>Username</FormLabel>
              <FormControl>
                <Input placeholder="shadcn" {...field} />
              </FormControl>
              <FormDescription>
                This is your public display name.
              </FormDescription>
              <FormMessage />
            </FormItem>
          )}
        />
        <Button type="submit">Submit</Button>
      </form>
    </Form>
  )
}"#,
}];

static TOAST: &[DemoSource] = &[DemoSource {
    name: "Toast Notification",
    description: "Show toast notifications",
    preview: Some("const { toast } = useToast()"),
    imports: &[
        BUTTON_IMPORT,
        r#"import { useToast } from "@/components/ui/use-toast""#,
    ],
    code: r#"<Button
  variant="outline"
  onClick={() => {
    toast({
      title: "Scheduled: Catch up",
      description: "Friday, February 10, 2023 at 5:57 PM",
    })
  }}
>
  Show Toast
</Button>"#,
}];

static TABLE: &[DemoSource] = &[DemoSource {
    name: "Basic Table",
    description: "A simple data table",
    preview: None,
    imports: &[
        r#"import { Table, TableBody, TableCaption, TableCell, TableHead, TableHeader, TableRow } from "@/components/ui/table""#,
    ],
    code: r#"<Table>
  <TableCaption>A list of your recent invoices.</TableCaption>
  <TableHeader>
    <TableRow>
      <TableHead className="w-[100px]">Invoice</TableHead>
      <TableHead>Status</TableHead>
      <TableHead>Method</TableHead>
      <TableHead className="text-right">Amount</TableHead>
    </TableRow>
  </TableHeader>
  <TableBody>
    <TableRow>
      <TableCell className="font-medium">INV001</TableCell>
      <TableCell>Paid</TableCell>
      <TableCell>Credit Card</TableCell>
      <TableCell className="text-right">$250.00</TableCell>
    </TableRow>
    <TableRow>
      <TableCell className="font-medium">INV002</TableCell>
      <TableCell>Pending</TableCell>
      <TableCell>PayPal</TableCell>
      <TableCell className="text-right">$150.00</TableCell>
    </TableRow>
  </TableBody>
</Table>"#,
}];

static TABS: &[DemoSource] = &[DemoSource {
    name: "Basic Tabs",
    description: "Tab navigation component",
    preview: None,
    imports: &[
        r#"import { Tabs, TabsContent, TabsList, TabsTrigger } from "@/components/ui/tabs""#,
    ],
    code: r#"<Tabs defaultValue="account" className="w-[400px]">
  <TabsList className="grid w-full grid-cols-2">
    <TabsTrigger value="account">Account</TabsTrigger>
    <TabsTrigger value="password">Password</TabsTrigger>
  </TabsList>
  <TabsContent value="account">Make changes to your account here.</TabsContent>
  <TabsContent value="password">Change your password here.</TabsContent>
</Tabs>"#,
}];

fn hand_written(name: &str) -> Option<&'static [DemoSource]> {
    let demos = match name {
        "button" => BUTTON,
        "card" => CARD,
        "input" => INPUT,
        "dialog" => DIALOG,
        "select" => SELECT,
        "form" => FORM,
        "toast" => TOAST,
        "table" => TABLE,
        "tabs" => TABS,
        _ => return None,
    };
    Some(demos)
}

/// `dropdown-menu` → `DropdownMenu`
fn component_title(name: &str) -> String {
    name.split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

fn default_demo(name: &str) -> Demo {
    let title = component_title(name);
    Demo {
        name: format!("Basic {}", title),
        description: format!("Basic usage of the {} component", name),
        imports: vec![format!(
            r#"import {{ {} }} from "@/components/ui/{}""#,
            title, name
        )],
        code: format!("<{title}>\n  {title} content\n</{title}>", title = title),
        preview: None,
    }
}

/// Demo number `index` for `name`; out-of-range indices fall back to the first
pub fn demo_for(name: &str, index: usize) -> Demo {
    match hand_written(name) {
        Some(demos) => demos.get(index).unwrap_or(&demos[0]).to_demo(),
        None => default_demo(name),
    }
}

/// All demos for `name`, at least one
pub fn demos_for(name: &str) -> Vec<Demo> {
    match hand_written(name) {
        Some(demos) => demos.iter().map(DemoSource::to_demo).collect(),
        None => vec![default_demo(name)],
    }
}

/// Render a demo as a self-contained React component
///
/// Code that already declares its own exported component is emitted as is.
pub fn format_demo(demo: &Demo) -> String {
    if demo.code.contains("export function ") {
        return format!("{}\n\n{}", demo.imports.join("\n"), demo.code);
    }

    let function_name: String = demo.name.split_whitespace().collect();
    let body = demo
        .code
        .lines()
        .map(|line| format!("    {}", line))
        .collect::<Vec<_>>()
        .join("\n");

    let mut out = demo.imports.join("\n");
    out.push_str("\n\n");
    out.push_str(&format!("export function {}Demo() {{\n", function_name));
    if let Some(preview) = demo.preview.as_deref().filter(|p| !p.is_empty()) {
        out.push_str(&format!("  {}\n\n", preview));
    }
    out.push_str(&format!("  return (\n{}\n  )\n}}", body));
    out
}
